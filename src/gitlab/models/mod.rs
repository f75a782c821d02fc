//! Data models representing merge requests, notes, and discussions.

use std::fmt;

use serde::Deserialize;

use super::error::ReportError;
use super::project::MergeRequestIid;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Merge request lifecycle state as reported by GitLab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeRequestState {
    /// Open for review.
    Opened,
    /// Closed without merging.
    Closed,
    /// Merged into the target branch.
    Merged,
    /// Temporarily locked while GitLab processes a merge.
    Locked,
    /// Any other value GitLab reports, kept verbatim.
    Other(String),
}

impl MergeRequestState {
    /// Returns the value exactly as GitLab spells it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Opened => "opened",
            Self::Closed => "closed",
            Self::Merged => "merged",
            Self::Locked => "locked",
            Self::Other(value) => value.as_str(),
        }
    }
}

impl From<String> for MergeRequestState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "opened" => Self::Opened,
            "closed" => Self::Closed,
            "merged" => Self::Merged,
            "locked" => Self::Locked,
            _ => Self::Other(value),
        }
    }
}

impl fmt::Display for MergeRequestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Merge request fields used by the report.
///
/// Timestamps are the verbatim strings GitLab returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequest {
    /// Project-scoped merge request number.
    pub iid: MergeRequestIid,
    /// Web URL for displaying to a user.
    pub web_url: String,
    /// Lifecycle state.
    pub state: MergeRequestState,
    /// Creation timestamp.
    pub created_at: String,
    /// Close timestamp, when closed.
    pub closed_at: Option<String>,
    /// Merge timestamp, when merged.
    pub merged_at: Option<String>,
}

/// A single comment-like entry on a merge request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Note {
    /// Note identifier.
    pub id: u64,
    /// Whether GitLab generated the note (assignments, label changes, ...).
    pub system: bool,
}

impl Note {
    /// Returns true when a person wrote the note.
    #[must_use]
    pub const fn is_user_authored(&self) -> bool {
        !self.system
    }
}

/// A thread of notes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discussion {
    /// Notes in thread order.
    pub notes: Vec<Note>,
}

impl Discussion {
    /// Number of user-authored notes in the thread.
    #[must_use]
    pub fn user_note_count(&self) -> usize {
        count_user_notes(&self.notes)
    }
}

/// Counts the notes a person wrote, skipping system notes.
#[must_use]
pub fn count_user_notes(notes: &[Note]) -> usize {
    notes.iter().filter(|note| note.is_user_authored()).count()
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiMergeRequest {
    pub(crate) iid: u64,
    pub(crate) web_url: String,
    pub(crate) state: String,
    pub(crate) created_at: String,
    pub(crate) closed_at: Option<String>,
    pub(crate) merged_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiNote {
    pub(crate) id: u64,
    pub(crate) system: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiDiscussion {
    #[serde(default)]
    pub(crate) notes: Vec<ApiNote>,
}

impl TryFrom<ApiMergeRequest> for MergeRequest {
    type Error = ReportError;

    fn try_from(value: ApiMergeRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            iid: MergeRequestIid::new(value.iid)?,
            web_url: value.web_url,
            state: MergeRequestState::from(value.state),
            created_at: value.created_at,
            closed_at: value.closed_at,
            merged_at: value.merged_at,
        })
    }
}

impl From<ApiNote> for Note {
    fn from(value: ApiNote) -> Self {
        Self {
            id: value.id,
            system: value.system.unwrap_or(false),
        }
    }
}

impl From<ApiDiscussion> for Discussion {
    fn from(value: ApiDiscussion) -> Self {
        Self {
            notes: value.notes.into_iter().map(Note::from).collect(),
        }
    }
}
