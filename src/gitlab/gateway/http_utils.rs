//! Shared HTTP utilities for gateway implementations.

/// Pulls the human-readable error out of a GitLab error body.
///
/// GitLab answers with `{"message": "..."}` or `{"error": "..."}`; validation
/// failures put an object under `message`, which is returned as JSON text.
pub(super) fn extract_gitlab_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    let field = value.get("message").or_else(|| value.get("error"))?;
    Some(
        field
            .as_str()
            .map_or_else(|| field.to_string(), ToOwned::to_owned),
    )
}
