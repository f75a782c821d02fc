//! Error types exposed by the GitLab and reporting layers.

use thiserror::Error;

/// Errors surfaced while configuring, talking to GitLab, or writing the
/// report.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReportError {
    /// A required setting was absent or blank.
    #[error("{setting} is required: set {env} or pass {flag}")]
    MissingSetting {
        /// Human-readable name of the setting.
        setting: &'static str,
        /// Environment variable that supplies the setting.
        env: &'static str,
        /// Command-line flag that supplies the setting.
        flag: &'static str,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The GitLab API base URL could not be parsed or extended.
    #[error("GitLab API URL is invalid: {0}")]
    InvalidUrl(String),

    /// The project identifier was blank.
    #[error("project identifier must not be blank")]
    InvalidProjectId,

    /// The merge request iid is not a positive integer.
    #[error("merge request iid must be a positive integer")]
    InvalidMergeRequestIid,

    /// GitLab rejected the token.
    #[error("GitLab rejected the token: {message}")]
    Authentication {
        /// Message returned with the 401/403 response.
        message: String,
    },

    /// GitLab returned a non-success status other than an auth failure.
    #[error("GitLab API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// `message` or `error` field from the response body, or the raw body.
        message: String,
    },

    /// Networking failed while calling GitLab.
    #[error("network error talking to GitLab: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// A response body did not match the expected shape.
    #[error("unexpected GitLab response: {message}")]
    Decode {
        /// Deserialization error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl ReportError {
    /// Missing `GITLAB_TOKEN`.
    pub const MISSING_TOKEN: Self = Self::MissingSetting {
        setting: "access token",
        env: "GITLAB_TOKEN",
        flag: "--token",
    };

    /// Missing `GITLAB_PROJECT_ID`.
    pub const MISSING_PROJECT_ID: Self = Self::MissingSetting {
        setting: "project id",
        env: "GITLAB_PROJECT_ID",
        flag: "--project-id",
    };

    /// Missing `START_DATE`.
    pub const MISSING_START_DATE: Self = Self::MissingSetting {
        setting: "start date",
        env: "START_DATE",
        flag: "--start-date",
    };

    /// Missing `END_DATE`.
    pub const MISSING_END_DATE: Self = Self::MissingSetting {
        setting: "end date",
        env: "END_DATE",
        flag: "--end-date",
    };
}
