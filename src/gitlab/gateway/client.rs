//! `reqwest` client construction for the GitLab gateway.

use http::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;

use crate::gitlab::error::ReportError;
use crate::gitlab::project::PersonalAccessToken;

use super::error_mapping::map_reqwest_error;

/// Header GitLab reads personal access tokens from.
pub(super) const PRIVATE_TOKEN: HeaderName = HeaderName::from_static("private-token");

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Builds an HTTP client that sends the token on every request.
///
/// # Errors
///
/// Returns [`ReportError::Configuration`] when the token cannot be used as a
/// header value, or [`ReportError::Network`] when the TLS backend fails to
/// initialise.
pub(super) fn build_http_client(token: &PersonalAccessToken) -> Result<Client, ReportError> {
    let mut token_value =
        HeaderValue::from_str(token.value()).map_err(|error| ReportError::Configuration {
            message: format!("access token is not a valid header value: {error}"),
        })?;
    token_value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(PRIVATE_TOKEN, token_value);

    Client::builder()
        .default_headers(headers)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|error| map_reqwest_error("build client", &error))
}
