//! Core types for gitlab-mr-mcp

use serde::{Deserialize, Serialize};

/// Placeholder reported when GitLab omits `web_url` from a created MR
pub const MISSING_WEB_URL: &str = "URL not found";

/// A merge request as requested by the tool caller
///
/// Lives for a single tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequestRequest {
    /// Branch the changes come from
    pub source_branch: String,
    /// Branch the changes merge into
    pub target_branch: String,
    /// Caller-supplied title (None or blank means synthesize one)
    pub title: Option<String>,
    /// Reviewer emails in the order supplied
    pub reviewer_emails: Vec<String>,
}

impl MergeRequestRequest {
    /// Title to send: the trimmed caller title, or `Merge {source} into {target}`
    pub fn effective_title(&self) -> String {
        match self.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => format!("Merge {} into {}", self.source_branch, self.target_branch),
        }
    }
}

/// A user entry from `GET /users?search=`
///
/// GitLab only exposes `email` to admins or the user themselves, so both
/// address fields are optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GitLabUser {
    /// Numeric user id
    pub id: u64,
    /// Primary email
    #[serde(default)]
    pub email: Option<String>,
    /// Email shown on the public profile
    #[serde(default)]
    pub public_email: Option<String>,
}

/// Body of `POST /projects/:id/merge_requests`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateMergeRequestPayload {
    /// Source branch
    pub source_branch: String,
    /// Target branch
    pub target_branch: String,
    /// MR title
    pub title: String,
    /// Delete the source branch once merged
    pub remove_source_branch: bool,
    /// Resolved reviewer user ids
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer_ids: Option<Vec<u64>>,
}

/// The parts of a created merge request we report back
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedMergeRequest {
    /// Project-scoped MR number
    #[serde(default)]
    pub iid: Option<u64>,
    /// Browser URL of the MR
    #[serde(default)]
    pub web_url: Option<String>,
}

/// Reviewer emails split into resolved user ids and misses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedReviewers {
    /// User ids, in the order their emails were supplied
    pub ids: Vec<u64>,
    /// Emails with no matching user, in the order supplied
    pub unresolved: Vec<String>,
}

impl ResolvedReviewers {
    /// Whether every requested email resolved
    pub const fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Result of one `create_merge_request` invocation
///
/// Every branch stays typed until the tool boundary renders it with
/// [`std::fmt::Display`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeRequestOutcome {
    /// MR created; holds its web URL (or the placeholder)
    Created {
        /// Browser URL of the new MR
        web_url: String,
    },
    /// A branch name was missing
    InvalidInput,
    /// Named configuration variable was missing
    MissingConfig(&'static str),
    /// One or more reviewer emails had no GitLab user
    UnresolvedReviewers(Vec<String>),
    /// GitLab rejected the creation request
    Upstream {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },
    /// Transport or decode failure
    Unexpected(String),
}

impl MergeRequestOutcome {
    /// Whether the merge request was created
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Created { .. })
    }
}

impl std::fmt::Display for MergeRequestOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created { web_url } => write!(f, "Success! Merge Request created: {web_url}"),
            Self::InvalidInput => {
                write!(f, "Error: Both source_branch and target_branch are required.")
            }
            Self::MissingConfig(var) => write!(f, "Error: {var} environment variable is not set."),
            Self::UnresolvedReviewers(emails) => write!(
                f,
                "Error: Could not find GitLab users for the following emails: {}",
                emails.join(", ")
            ),
            Self::Upstream { status, body } => write!(
                f,
                "Failed to create Merge Request. Status: {status}. Error: {body}"
            ),
            Self::Unexpected(message) => write!(f, "An unexpected error occurred: {message}"),
        }
    }
}
