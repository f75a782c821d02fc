//! Per merge request comment counting.

use crate::gitlab::models::count_user_notes;
use crate::gitlab::{Discussion, MergeRequestGateway, MergeRequestIid, Note, ReportError};

/// User-authored comment totals for one merge request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentCounts {
    /// `overview + discussion`.
    pub total: usize,
    /// Non-system notes on the merge request overview.
    pub overview: usize,
    /// Non-system notes across all discussions.
    pub discussion: usize,
}

impl CommentCounts {
    /// Counts non-system notes in the overview and in every discussion.
    ///
    /// Overview notes and discussion notes are summed as given; GitLab
    /// returns them as separate collections.
    #[must_use]
    pub fn tally(notes: &[Note], discussions: &[Discussion]) -> Self {
        let overview = count_user_notes(notes);
        let discussion = discussions.iter().map(Discussion::user_note_count).sum();
        Self {
            total: overview + discussion,
            overview,
            discussion,
        }
    }
}

/// Fetches notes then discussions for the merge request and tallies them.
///
/// # Errors
///
/// Logs and returns the first gateway failure unchanged.
pub async fn count_comments<Gateway>(
    gateway: &Gateway,
    iid: MergeRequestIid,
) -> Result<CommentCounts, ReportError>
where
    Gateway: MergeRequestGateway + ?Sized,
{
    let result = fetch_and_tally(gateway, iid).await;
    match &result {
        Ok(counts) => tracing::debug!(
            iid = iid.get(),
            total = counts.total,
            overview = counts.overview,
            discussion = counts.discussion,
            "counted comments"
        ),
        Err(error) => tracing::error!(iid = iid.get(), %error, "error fetching comments"),
    }
    result
}

async fn fetch_and_tally<Gateway>(
    gateway: &Gateway,
    iid: MergeRequestIid,
) -> Result<CommentCounts, ReportError>
where
    Gateway: MergeRequestGateway + ?Sized,
{
    let notes = gateway.notes(iid).await?;
    let discussions = gateway.discussions(iid).await?;
    Ok(CommentCounts::tally(&notes, &discussions))
}
