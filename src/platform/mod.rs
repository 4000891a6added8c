//! GitLab REST API access
//!
//! The merge request flow only talks to GitLab through [`GitLabApi`], so it
//! can run against a recording mock in tests.

mod gitlab;

pub use gitlab::GitLabService;

use crate::error::Result;
use crate::types::{CreateMergeRequestPayload, CreatedMergeRequest, GitLabUser};
use async_trait::async_trait;

/// GitLab operations needed to open a merge request
#[async_trait]
pub trait GitLabApi: Send + Sync {
    /// Search users by free text (`GET /users?search=`)
    ///
    /// Returns only the first page GitLab sends back. Any status other than
    /// 200 is an [`Error::Upstream`](crate::error::Error::Upstream).
    async fn search_users(&self, query: &str) -> Result<Vec<GitLabUser>>;

    /// Open a merge request in the configured project
    ///
    /// Any status other than 201 is an
    /// [`Error::Upstream`](crate::error::Error::Upstream) carrying the raw body.
    async fn create_merge_request(
        &self,
        payload: &CreateMergeRequestPayload,
    ) -> Result<CreatedMergeRequest>;
}
