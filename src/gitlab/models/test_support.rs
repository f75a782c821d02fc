//! Test helpers for constructing merge request, note, and discussion
//! fixtures.
//!
//! # Examples
//!
//! ```
//! use mrtally::gitlab::models::test_support::{discussion, system_note, user_note};
//!
//! let thread = discussion(vec![user_note(1), system_note(2)]);
//! assert_eq!(thread.user_note_count(), 1);
//! ```

use super::{Discussion, MergeRequest, MergeRequestState, Note};
use crate::gitlab::project::MergeRequestIid;

/// Builds a user-authored note with the given id.
#[must_use]
pub fn user_note(id: u64) -> Note {
    Note {
        id,
        system: false,
    }
}

/// Builds a system note with the given id.
#[must_use]
pub fn system_note(id: u64) -> Note {
    Note {
        id,
        system: true,
    }
}

/// Builds a discussion holding the given notes.
#[must_use]
pub const fn discussion(notes: Vec<Note>) -> Discussion {
    Discussion { notes }
}

/// Builds an open merge request at `https://gitlab.example.com/p/mr/{iid}`.
///
/// # Panics
///
/// Panics when `iid` is zero.
#[must_use]
pub fn open_merge_request(iid: u64) -> MergeRequest {
    MergeRequest {
        iid: MergeRequestIid::new(iid)
            .unwrap_or_else(|error| panic!("fixture iid {iid} is invalid: {error}")),
        web_url: format!("https://gitlab.example.com/p/mr/{iid}"),
        state: MergeRequestState::Opened,
        created_at: "2023-01-01T00:00:00Z".to_owned(),
        closed_at: None,
        merged_at: None,
    }
}

/// Builds a JSON merge request body as GitLab returns it.
#[must_use]
pub fn merge_request_json(iid: u64, state: &str) -> serde_json::Value {
    serde_json::json!({
        "id": iid + 1000,
        "iid": iid,
        "title": format!("Merge request {iid}"),
        "web_url": format!("https://gitlab.example.com/group/project/-/merge_requests/{iid}"),
        "state": state,
        "created_at": format!("2023-01-{:02}T10:00:00.000Z", iid.min(28)),
        "closed_at": null,
        "merged_at": if state == "merged" {
            serde_json::Value::String(format!("2023-02-{:02}T10:00:00.000Z", iid.min(28)))
        } else {
            serde_json::Value::Null
        },
    })
}

/// Builds a JSON note body as GitLab returns it.
#[must_use]
pub fn note_json(id: u64, system: bool) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "body": if system { "assigned to @octo" } else { "looks good" },
        "system": system,
        "author": { "username": if system { "gitlab" } else { "reviewer" } },
    })
}

/// Builds a JSON discussion body holding the given notes.
#[must_use]
pub fn discussion_json(id: &str, notes: &[serde_json::Value]) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "individual_note": notes.len() == 1,
        "notes": notes,
    })
}
