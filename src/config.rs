//! GitLab connection configuration
//!
//! Built once at startup (from CLI flags or the environment) and handed to the
//! tool server. Presence of the token and project id is only checked when a
//! merge request is requested, so the server can start without them.

use crate::error::{Error, Result};

/// Environment variable holding the personal access token
pub const TOKEN_VAR: &str = "GITLAB_TOKEN";

/// Environment variable holding the project id or `group/project` path
pub const PROJECT_ID_VAR: &str = "GITLAB_PROJECT_ID";

/// Environment variable holding the GitLab base URL
pub const URL_VAR: &str = "GITLAB_URL";

/// Base URL used when `GITLAB_URL` is unset
pub const DEFAULT_GITLAB_URL: &str = "https://gitlab.com";

/// GitLab connection settings
#[derive(Clone, PartialEq, Eq)]
pub struct GitLabConfig {
    base_url: String,
    project_id: Option<String>,
    token: Option<String>,
}

/// Connection settings with every required value present
#[derive(Clone, Copy)]
pub struct Credentials<'a> {
    /// Base URL without trailing slash
    pub base_url: &'a str,
    /// Project id or path
    pub project_id: &'a str,
    /// Personal access token
    pub token: &'a str,
}

impl GitLabConfig {
    /// Create a config, treating blank values as absent
    pub fn new(base_url: Option<String>, project_id: Option<String>, token: Option<String>) -> Self {
        let base_url = non_blank(base_url).unwrap_or_else(|| DEFAULT_GITLAB_URL.to_string());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            project_id: non_blank(project_id),
            token: non_blank(token),
        }
    }

    /// Read `GITLAB_URL`, `GITLAB_PROJECT_ID` and `GITLAB_TOKEN` from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::new(lookup(URL_VAR), lookup(PROJECT_ID_VAR), lookup(TOKEN_VAR))
    }

    /// GitLab base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Configured project id, if any
    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    /// Whether a token is configured
    pub const fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Required values, or the first missing variable (token before project id)
    pub fn credentials(&self) -> Result<Credentials<'_>> {
        let token = self
            .token
            .as_deref()
            .ok_or(Error::MissingConfig(TOKEN_VAR))?;
        let project_id = self
            .project_id
            .as_deref()
            .ok_or(Error::MissingConfig(PROJECT_ID_VAR))?;
        Ok(Credentials {
            base_url: &self.base_url,
            project_id,
            token,
        })
    }
}

impl Default for GitLabConfig {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}

impl std::fmt::Debug for GitLabConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitLabConfig")
            .field("base_url", &self.base_url)
            .field("project_id", &self.project_id)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
