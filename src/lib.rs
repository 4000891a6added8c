//! gitlab-mr-mcp: open GitLab merge requests from an MCP tool
//!
//! Serves a single `create_merge_request` tool. Reviewer email addresses are
//! resolved to GitLab user ids before the merge request is opened, and every
//! outcome is reported back to the caller as text.

pub mod config;
pub mod error;
pub mod mcp;
pub mod merge_request;
pub mod platform;
pub mod reviewers;
pub mod types;
