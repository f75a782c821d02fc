//! Identity wrappers for the GitLab project, its API base, and credentials.

use std::fmt;

use url::Url;

use super::error::ReportError;

/// Base URL of the GitLab REST API, e.g. `https://gitlab.com/api/v4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase(Url);

impl ApiBase {
    /// Public gitlab.com API base used when none is configured.
    pub const DEFAULT: &'static str = "https://gitlab.com/api/v4";

    /// Parses an absolute API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidUrl`] when the value is not an absolute
    /// URL that can carry path segments.
    pub fn parse(value: &str) -> Result<Self, ReportError> {
        let url =
            Url::parse(value.trim()).map_err(|error| ReportError::InvalidUrl(error.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(ReportError::InvalidUrl(format!(
                "{value} cannot be used as a base URL"
            )));
        }
        Ok(Self(url))
    }

    /// Borrow the base URL as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Appends path segments to the base, percent-encoding each one.
    ///
    /// A trailing slash on the base is ignored, and a segment containing `/`
    /// is encoded as `%2F` so that `group/project` stays a single segment.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidUrl`] if the base cannot carry a path.
    pub fn endpoint<I>(&self, segments: I) -> Result<Url, ReportError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.0.clone();
        url.path_segments_mut()
            .map_err(|()| ReportError::InvalidUrl(format!("{} cannot carry a path", self.0)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// GitLab project identifier: a numeric id or a `namespace/project` path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectId(String);

impl ProjectId {
    /// Validates that the identifier is not blank and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidProjectId`] for a blank value.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ReportError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ReportError::InvalidProjectId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the raw, unencoded identifier.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Project-scoped merge request number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MergeRequestIid(u64);

impl MergeRequestIid {
    /// Wraps a positive iid.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidMergeRequestIid`] for zero.
    pub const fn new(value: u64) -> Result<Self, ReportError> {
        if value == 0 {
            return Err(ReportError::InvalidMergeRequestIid);
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MergeRequestIid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MissingSetting`] for `GITLAB_TOKEN` when the
    /// supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, ReportError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ReportError::MISSING_TOKEN);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl fmt::Debug for PersonalAccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PersonalAccessToken(<redacted>)")
    }
}

/// Creation-time bounds passed to GitLab as `created_after`/`created_before`.
///
/// Values are forwarded verbatim; GitLab expects ISO-8601 timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedWindow {
    created_after: String,
    created_before: String,
}

impl CreatedWindow {
    /// Creates a window from the start and end timestamps.
    #[must_use]
    pub fn new(created_after: impl Into<String>, created_before: impl Into<String>) -> Self {
        Self {
            created_after: created_after.into(),
            created_before: created_before.into(),
        }
    }

    /// Lower creation bound.
    #[must_use]
    pub const fn created_after(&self) -> &str {
        self.created_after.as_str()
    }

    /// Upper creation bound.
    #[must_use]
    pub const fn created_before(&self) -> &str {
        self.created_before.as_str()
    }
}
