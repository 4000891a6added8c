//! Error types for gitlab-mr-mcp

use thiserror::Error;

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while talking to GitLab or serving the tool
#[derive(Debug, Error)]
pub enum Error {
    /// Required configuration value is absent
    #[error("{0} environment variable is not set")]
    MissingConfig(&'static str),

    /// GitLab answered with an unexpected status code
    #[error("GitLab API returned {status}: {body}")]
    Upstream {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// GitLab API error not tied to a response status
    #[error("GitLab API error: {0}")]
    GitLabApi(String),

    /// HTTP transport failure (connect, timeout, body decode)
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the JSON we expected
    #[error("failed to decode GitLab response: {0}")]
    Decode(#[from] serde_json::Error),

    /// MCP transport failure
    #[error("MCP transport error: {0}")]
    Transport(String),
}
