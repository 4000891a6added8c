//! Merge request creation
//!
//! Runs the whole `create_merge_request` flow: validate the arguments, check
//! configuration, resolve reviewers, then POST. Each step either hands off to
//! the next or ends the invocation with a [`MergeRequestOutcome`]; nothing is
//! retried and no MR is opened with a partial reviewer list.

use crate::config::GitLabConfig;
use crate::error::Error;
use crate::platform::{GitLabApi, GitLabService};
use crate::reviewers::{parse_reviewer_emails, resolve_reviewers};
use crate::types::{
    CreateMergeRequestPayload, MISSING_WEB_URL, MergeRequestOutcome, MergeRequestRequest,
};
use tracing::{error, info};

/// Raw tool arguments, as strings straight from the caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateMergeRequestArgs {
    /// Source branch (required)
    pub source_branch: String,
    /// Target branch (required)
    pub target_branch: String,
    /// Optional title
    pub title: Option<String>,
    /// Optional comma-separated reviewer emails
    pub reviewer_emails: Option<String>,
}

impl From<Error> for MergeRequestOutcome {
    fn from(err: Error) -> Self {
        match err {
            Error::MissingConfig(var) => Self::MissingConfig(var),
            Error::Upstream { status, body } => Self::Upstream { status, body },
            other => Self::Unexpected(other.to_string()),
        }
    }
}

/// Check branch names and normalize the optional fields
///
/// Branch names are trimmed; a name that is empty afterwards is rejected.
pub fn validate_args(
    args: CreateMergeRequestArgs,
) -> std::result::Result<MergeRequestRequest, MergeRequestOutcome> {
    let source_branch = args.source_branch.trim();
    let target_branch = args.target_branch.trim();
    if source_branch.is_empty() || target_branch.is_empty() {
        return Err(MergeRequestOutcome::InvalidInput);
    }

    Ok(MergeRequestRequest {
        source_branch: source_branch.to_string(),
        target_branch: target_branch.to_string(),
        title: args.title,
        reviewer_emails: args
            .reviewer_emails
            .as_deref()
            .map(parse_reviewer_emails)
            .unwrap_or_default(),
    })
}

/// Create a merge request using the given configuration
///
/// Validation and configuration failures return before any HTTP client is
/// built.
pub async fn create_merge_request(
    config: &GitLabConfig,
    args: CreateMergeRequestArgs,
) -> MergeRequestOutcome {
    let request = match validate_args(args) {
        Ok(request) => request,
        Err(outcome) => return outcome,
    };

    let credentials = match config.credentials() {
        Ok(credentials) => credentials,
        Err(e) => return e.into(),
    };

    let service = match GitLabService::new(credentials) {
        Ok(service) => service,
        Err(e) => {
            error!(error = %e, "failed to build GitLab client");
            return e.into();
        }
    };

    submit_merge_request(&service, &request).await
}

/// Resolve reviewers and open the MR through `api`
pub async fn submit_merge_request(
    api: &dyn GitLabApi,
    request: &MergeRequestRequest,
) -> MergeRequestOutcome {
    let reviewer_ids = if request.reviewer_emails.is_empty() {
        None
    } else {
        let resolved = resolve_reviewers(api, &request.reviewer_emails).await;
        if !resolved.is_complete() {
            error!(unresolved = ?resolved.unresolved, "reviewer emails did not resolve");
            return MergeRequestOutcome::UnresolvedReviewers(resolved.unresolved);
        }
        Some(resolved.ids).filter(|ids| !ids.is_empty())
    };

    let payload = CreateMergeRequestPayload {
        source_branch: request.source_branch.clone(),
        target_branch: request.target_branch.clone(),
        title: request.effective_title(),
        remove_source_branch: true,
        reviewer_ids,
    };

    info!(
        "Attempting to create MR from {} to {}",
        payload.source_branch, payload.target_branch
    );

    match api.create_merge_request(&payload).await {
        Ok(mr) => {
            let web_url = mr.web_url.unwrap_or_else(|| MISSING_WEB_URL.to_string());
            info!(web_url = %web_url, "merge request created");
            MergeRequestOutcome::Created { web_url }
        }
        Err(Error::Upstream { status, body }) => {
            error!(status, "GitLab API Error: {body}");
            MergeRequestOutcome::Upstream { status, body }
        }
        Err(e) => {
            error!(error = %e, "Unexpected error creating merge request");
            MergeRequestOutcome::Unexpected(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(source: &str, target: &str) -> CreateMergeRequestArgs {
        CreateMergeRequestArgs {
            source_branch: source.to_string(),
            target_branch: target.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_rejects_empty_branches() {
        for (source, target) in [("", "main"), ("feat", ""), ("", ""), ("  ", "main")] {
            assert_eq!(
                validate_args(args(source, target)),
                Err(MergeRequestOutcome::InvalidInput),
                "source={source:?} target={target:?}"
            );
        }
    }

    #[test]
    fn test_validate_parses_reviewers() {
        let request = validate_args(CreateMergeRequestArgs {
            reviewer_emails: Some("a@x.com, b@x.com".to_string()),
            ..args("feat", "main")
        })
        .unwrap();
        assert_eq!(request.reviewer_emails, vec!["a@x.com", "b@x.com"]);
    }

    #[test]
    fn test_error_conversion_keeps_upstream_details() {
        let outcome: MergeRequestOutcome = Error::Upstream {
            status: 400,
            body: "bad".to_string(),
        }
        .into();
        assert_eq!(
            outcome,
            MergeRequestOutcome::Upstream {
                status: 400,
                body: "bad".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_missing_config_short_circuits() {
        let config = GitLabConfig::new(None, Some("42".to_string()), None);
        let outcome = create_merge_request(&config, args("feat", "main")).await;
        assert_eq!(outcome, MergeRequestOutcome::MissingConfig("GITLAB_TOKEN"));
    }
}
