//! MCP tool definitions
//!
//! Defines the `create_merge_request` tool schema.

use crate::merge_request::CreateMergeRequestArgs;
use schemars::JsonSchema;
use serde::Deserialize;

/// Request schema for the `create_merge_request` MCP tool
///
/// Branch names default to empty so a missing one reaches validation and is
/// reported as text instead of a protocol error.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct CreateMergeRequestInput {
    /// Branch containing the changes
    #[serde(default)]
    #[schemars(description = "The source branch name (required)")]
    pub source_branch: String,

    /// Branch to merge into
    #[serde(default)]
    #[schemars(description = "The target branch name, e.g. main (required)")]
    pub target_branch: String,

    /// Merge request title
    #[serde(default)]
    #[schemars(
        description = "Title for the merge request. Defaults to 'Merge <source> into <target>'"
    )]
    pub title: Option<String>,

    /// Comma-separated reviewer emails
    #[serde(default)]
    #[schemars(
        description = "Comma-separated email addresses of reviewers, e.g. 'a@example.com, b@example.com'. The merge request is not created if any address has no GitLab user."
    )]
    pub reviewer_emails: Option<String>,
}

impl From<CreateMergeRequestInput> for CreateMergeRequestArgs {
    fn from(input: CreateMergeRequestInput) -> Self {
        Self {
            source_branch: input.source_branch,
            target_branch: input.target_branch,
            title: input.title,
            reviewer_emails: input.reviewer_emails,
        }
    }
}
