//! Report assembly over a merge request gateway.

use std::num::NonZeroUsize;

use futures::future::try_join_all;
use futures::stream::{self, StreamExt, TryStreamExt};

use crate::gitlab::{MergeRequest, MergeRequestGateway, ReportError};

use super::comments::count_comments;
use super::model::ReportRow;

/// Merge requests whose comments are fetched at the same time by default.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// How many merge requests may have comment requests in flight at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Concurrency {
    /// Every merge request starts immediately.
    Unbounded,
    /// At most this many merge requests are in flight.
    Limited(NonZeroUsize),
}

impl Concurrency {
    /// Maps a configured limit to a policy; zero means unbounded.
    #[must_use]
    pub const fn from_limit(limit: usize) -> Self {
        match NonZeroUsize::new(limit) {
            Some(limit) => Self::Limited(limit),
            None => Self::Unbounded,
        }
    }
}

impl Default for Concurrency {
    fn default() -> Self {
        Self::from_limit(DEFAULT_CONCURRENCY)
    }
}

/// Builds report rows by counting comments for each merge request.
pub struct ReportBuilder<'client, Gateway>
where
    Gateway: MergeRequestGateway,
{
    client: &'client Gateway,
    concurrency: Concurrency,
}

impl<'client, Gateway> ReportBuilder<'client, Gateway>
where
    Gateway: MergeRequestGateway,
{
    /// Create a builder using the provided gateway and the default
    /// concurrency limit.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self {
            client,
            concurrency: Concurrency::from_limit(DEFAULT_CONCURRENCY),
        }
    }

    /// Overrides the concurrency policy.
    #[must_use]
    pub const fn with_concurrency(mut self, concurrency: Concurrency) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Counts comments for every merge request and returns one row each, in
    /// the order given.
    ///
    /// # Errors
    ///
    /// Fails with the first comment-fetch error; no rows are returned in
    /// that case.
    pub async fn build(
        &self,
        merge_requests: &[MergeRequest],
    ) -> Result<Vec<ReportRow>, ReportError> {
        let rows = merge_requests
            .iter()
            .map(|merge_request| self.row_for(merge_request));

        match self.concurrency {
            Concurrency::Unbounded => try_join_all(rows).await,
            Concurrency::Limited(limit) => {
                stream::iter(rows)
                    .buffered(limit.get())
                    .try_collect::<Vec<_>>()
                    .await
            }
        }
    }

    async fn row_for(&self, merge_request: &MergeRequest) -> Result<ReportRow, ReportError> {
        let counts = count_comments(self.client, merge_request.iid).await?;
        Ok(ReportRow::new(merge_request, counts))
    }
}
