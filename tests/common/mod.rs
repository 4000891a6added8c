//! Shared test helpers

pub mod mock_gitlab;

pub use mock_gitlab::MockGitLabApi;

use gitlab_mr_mcp::types::{GitLabUser, MergeRequestRequest};

/// A user whose primary email is `email`
pub fn make_user(id: u64, email: &str) -> GitLabUser {
    GitLabUser {
        id,
        email: Some(email.to_string()),
        public_email: None,
    }
}

/// A user with neither email field visible
pub fn make_private_user(id: u64) -> GitLabUser {
    GitLabUser {
        id,
        email: None,
        public_email: None,
    }
}

/// A `feat` -> `main` request with the given reviewers
pub fn make_request(reviewers: &[&str]) -> MergeRequestRequest {
    MergeRequestRequest {
        source_branch: "feat".to_string(),
        target_branch: "main".to_string(),
        title: None,
        reviewer_emails: reviewers.iter().map(ToString::to_string).collect(),
    }
}
