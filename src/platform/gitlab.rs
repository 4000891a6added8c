//! GitLab service implementation

use crate::config::Credentials;
use crate::error::{Error, Result};
use crate::platform::GitLabApi;
use crate::types::{CreateMergeRequestPayload, CreatedMergeRequest, GitLabUser};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

/// Header GitLab reads personal access tokens from
const TOKEN_HEADER: &str = "Private-Token";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// GitLab service using reqwest
pub struct GitLabService {
    client: Client,
    token: String,
    base_url: String,
    project_id: String,
}

impl GitLabService {
    /// Create a new GitLab service for one project
    pub fn new(credentials: Credentials<'_>) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::GitLabApi(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            token: credentials.token.to_string(),
            base_url: credentials.base_url.trim_end_matches('/').to_string(),
            project_id: credentials.project_id.to_string(),
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/v4{}", self.base_url, path)
    }

    /// Project id as a single path segment (`group/project` becomes `group%2Fproject`)
    fn encoded_project(&self) -> String {
        urlencoding::encode(&self.project_id).into_owned()
    }
}

#[async_trait]
impl GitLabApi for GitLabService {
    async fn search_users(&self, query: &str) -> Result<Vec<GitLabUser>> {
        debug!(query, "searching users");
        let url = self.api_url("/users");

        let response = self
            .client
            .get(&url)
            .header(TOKEN_HEADER, &self.token)
            .query(&[("search", query)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status != StatusCode::OK {
            return Err(Error::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let users: Vec<GitLabUser> = serde_json::from_str(&body)?;
        debug!(query, count = users.len(), "searched users");
        Ok(users)
    }

    async fn create_merge_request(
        &self,
        payload: &CreateMergeRequestPayload,
    ) -> Result<CreatedMergeRequest> {
        debug!(
            source = %payload.source_branch,
            target = %payload.target_branch,
            reviewers = payload.reviewer_ids.as_ref().map_or(0, Vec::len),
            "creating MR"
        );
        let url = self.api_url(&format!(
            "/projects/{}/merge_requests",
            self.encoded_project()
        ));

        let response = self
            .client
            .post(&url)
            .header(TOKEN_HEADER, &self.token)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status != StatusCode::CREATED {
            return Err(Error::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let mr: CreatedMergeRequest = serde_json::from_str(&body)?;
        debug!(mr_iid = ?mr.iid, "created MR");
        Ok(mr)
    }
}
