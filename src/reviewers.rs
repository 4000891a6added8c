//! Reviewer resolution: email address -> GitLab user id

use crate::error::Error;
use crate::platform::GitLabApi;
use crate::types::{GitLabUser, ResolvedReviewers};
use tracing::{debug, error, warn};

/// Split a comma-separated email list
///
/// Tokens are trimmed, empty tokens dropped, and repeats (compared
/// case-insensitively) collapsed onto their first occurrence.
pub fn parse_reviewer_emails(raw: &str) -> Vec<String> {
    let mut emails: Vec<String> = Vec::new();
    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let lowered = token.to_lowercase();
        if !emails.iter().any(|e| e.to_lowercase() == lowered) {
            emails.push(token.to_string());
        }
    }
    emails
}

/// Pick the user an email most likely refers to
///
/// Order: exact `email` match, then exact `public_email` match (both
/// case-insensitive), then the first search result. The last step trusts
/// GitLab's own ranking even when no address matches.
pub fn match_user(users: &[GitLabUser], email: &str) -> Option<u64> {
    let wanted = email.to_lowercase();
    let address_matches =
        |field: Option<&String>| field.is_some_and(|v| v.to_lowercase() == wanted);

    users
        .iter()
        .find(|u| address_matches(u.email.as_ref()))
        .or_else(|| users.iter().find(|u| address_matches(u.public_email.as_ref())))
        .or_else(|| users.first())
        .map(|u| u.id)
}

/// Resolve one email, treating any lookup failure as "not found"
pub async fn resolve_reviewer(api: &dyn GitLabApi, email: &str) -> Option<u64> {
    match api.search_users(email).await {
        Ok(users) => {
            let id = match_user(&users, email);
            debug!(email, candidates = users.len(), user_id = ?id, "resolved reviewer");
            id
        }
        Err(Error::Upstream { status, body }) => {
            warn!(email, status, body = %body, "user search rejected");
            None
        }
        Err(e) => {
            error!(email, error = %e, "error looking up user by email");
            None
        }
    }
}

/// Resolve every email in order, one request at a time
pub async fn resolve_reviewers(api: &dyn GitLabApi, emails: &[String]) -> ResolvedReviewers {
    let mut resolved = ResolvedReviewers::default();
    for email in emails {
        match resolve_reviewer(api, email).await {
            Some(id) => resolved.ids.push(id),
            None => resolved.unresolved.push(email.clone()),
        }
    }
    resolved
}
