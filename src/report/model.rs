//! Report row model.

use std::fmt;

use crate::gitlab::MergeRequest;

use super::comments::CommentCounts;

/// Value of the Closed Date column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClosedDate {
    /// Close or merge timestamp as GitLab reported it.
    At(String),
    /// Neither closed nor merged; written as `opened`.
    StillOpen,
}

impl ClosedDate {
    /// Prefers `closed_at`, then `merged_at`.
    #[must_use]
    pub fn from_merge_request(merge_request: &MergeRequest) -> Self {
        merge_request
            .closed_at
            .as_ref()
            .or(merge_request.merged_at.as_ref())
            .map_or(Self::StillOpen, |timestamp| Self::At(timestamp.clone()))
    }

    /// Returns the column text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::At(timestamp) => timestamp.as_str(),
            Self::StillOpen => "opened",
        }
    }
}

impl fmt::Display for ClosedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One CSV line: a merge request and its comment total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Merge request iid.
    pub id: u64,
    /// Merge request web URL.
    pub url: String,
    /// State as GitLab spells it.
    pub state: String,
    /// Creation timestamp.
    pub opened: String,
    /// Close or merge timestamp, or `opened`.
    pub closed: ClosedDate,
    /// User-authored comments across overview and discussions.
    pub comments: usize,
}

impl ReportRow {
    /// Builds the row for a merge request from its comment counts.
    #[must_use]
    pub fn new(merge_request: &MergeRequest, counts: CommentCounts) -> Self {
        Self {
            id: merge_request.iid.get(),
            url: merge_request.web_url.clone(),
            state: merge_request.state.as_str().to_owned(),
            opened: merge_request.created_at.clone(),
            closed: ClosedDate::from_merge_request(merge_request),
            comments: counts.total,
        }
    }
}
