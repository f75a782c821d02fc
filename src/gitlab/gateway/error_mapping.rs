//! Error mapping helpers for the GitLab gateway.

use http::StatusCode;

use crate::gitlab::error::ReportError;

use super::http_utils::extract_gitlab_message;

/// Checks if a GitLab status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

pub(super) fn map_reqwest_error(operation: &str, error: &reqwest::Error) -> ReportError {
    if error.is_decode() {
        return ReportError::Decode {
            message: format!("{operation}: {error}"),
        };
    }

    ReportError::Network {
        message: format!("{operation} failed: {error}"),
    }
}

pub(super) fn map_http_error(operation: &str, status: StatusCode, body: &str) -> ReportError {
    let message = extract_gitlab_message(body).unwrap_or_else(|| {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            "no response body".to_owned()
        } else {
            trimmed.to_owned()
        }
    });

    if is_auth_failure(status) {
        ReportError::Authentication {
            message: format!("{operation} failed: GitLab returned {status} {message}"),
        }
    } else {
        ReportError::Api {
            status: status.as_u16(),
            message: format!("{operation} failed: {message}"),
        }
    }
}
