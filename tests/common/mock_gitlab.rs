//! Mock GitLab API for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use gitlab_mr_mcp::error::{Error, Result};
use gitlab_mr_mcp::platform::GitLabApi;
use gitlab_mr_mcp::types::{CreateMergeRequestPayload, CreatedMergeRequest, GitLabUser};
use std::collections::HashMap;
use std::sync::Mutex;

/// Failure to inject into a mocked call
#[derive(Debug, Clone)]
enum Failure {
    Upstream { status: u16, body: String },
    Api(String),
}

impl Failure {
    fn to_error(&self) -> Error {
        match self {
            Self::Upstream { status, body } => Error::Upstream {
                status: *status,
                body: body.clone(),
            },
            Self::Api(msg) => Error::GitLabApi(msg.clone()),
        }
    }
}

/// Simple mock GitLab API
///
/// Features:
/// - Configurable search results per query (default: no users)
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockGitLabApi {
    search_responses: Mutex<HashMap<String, Vec<GitLabUser>>>,
    create_response: Mutex<CreatedMergeRequest>,
    // Call tracking
    search_calls: Mutex<Vec<String>>,
    create_calls: Mutex<Vec<CreateMergeRequestPayload>>,
    // Error injection
    error_on_search: Mutex<HashMap<String, Failure>>,
    error_on_create: Mutex<Option<Failure>>,
}

impl MockGitLabApi {
    /// Create a mock whose MR creation returns `https://gitlab.example/mr/1`
    pub fn new() -> Self {
        Self {
            search_responses: Mutex::new(HashMap::new()),
            create_response: Mutex::new(CreatedMergeRequest {
                iid: Some(1),
                web_url: Some("https://gitlab.example/mr/1".to_string()),
            }),
            search_calls: Mutex::new(Vec::new()),
            create_calls: Mutex::new(Vec::new()),
            error_on_search: Mutex::new(HashMap::new()),
            error_on_create: Mutex::new(None),
        }
    }

    // === Response setup ===

    /// Set the users returned when searching for `query`
    pub fn set_search_response(&self, query: &str, users: Vec<GitLabUser>) {
        self.search_responses
            .lock()
            .unwrap()
            .insert(query.to_string(), users);
    }

    /// Set the body returned by a successful `create_merge_request`
    pub fn set_create_response(&self, mr: CreatedMergeRequest) {
        *self.create_response.lock().unwrap() = mr;
    }

    // === Error injection methods ===

    /// Make searching for `query` answer with a non-200 status
    pub fn fail_search_with_status(&self, query: &str, status: u16, body: &str) {
        self.error_on_search.lock().unwrap().insert(
            query.to_string(),
            Failure::Upstream {
                status,
                body: body.to_string(),
            },
        );
    }

    /// Make searching for `query` fail without a response
    pub fn fail_search(&self, query: &str, msg: &str) {
        self.error_on_search
            .lock()
            .unwrap()
            .insert(query.to_string(), Failure::Api(msg.to_string()));
    }

    /// Make `create_merge_request` answer with a non-201 status
    pub fn fail_create_with_status(&self, status: u16, body: &str) {
        *self.error_on_create.lock().unwrap() = Some(Failure::Upstream {
            status,
            body: body.to_string(),
        });
    }

    /// Make `create_merge_request` fail without a response
    pub fn fail_create(&self, msg: &str) {
        *self.error_on_create.lock().unwrap() = Some(Failure::Api(msg.to_string()));
    }

    // === Call inspection ===

    /// Queries passed to `search_users`, in call order
    pub fn search_calls(&self) -> Vec<String> {
        self.search_calls.lock().unwrap().clone()
    }

    /// Payloads passed to `create_merge_request`, in call order
    pub fn create_calls(&self) -> Vec<CreateMergeRequestPayload> {
        self.create_calls.lock().unwrap().clone()
    }

    /// The single payload sent; panics unless exactly one create happened
    pub fn only_create_call(&self) -> CreateMergeRequestPayload {
        let calls = self.create_calls();
        assert_eq!(calls.len(), 1, "expected exactly one create call");
        calls.into_iter().next().unwrap()
    }
}

impl Default for MockGitLabApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GitLabApi for MockGitLabApi {
    async fn search_users(&self, query: &str) -> Result<Vec<GitLabUser>> {
        self.search_calls.lock().unwrap().push(query.to_string());

        if let Some(failure) = self.error_on_search.lock().unwrap().get(query) {
            return Err(failure.to_error());
        }

        Ok(self
            .search_responses
            .lock()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_default())
    }

    async fn create_merge_request(
        &self,
        payload: &CreateMergeRequestPayload,
    ) -> Result<CreatedMergeRequest> {
        self.create_calls.lock().unwrap().push(payload.clone());

        if let Some(failure) = self.error_on_create.lock().unwrap().as_ref() {
            return Err(failure.to_error());
        }

        Ok(self.create_response.lock().unwrap().clone())
    }
}
