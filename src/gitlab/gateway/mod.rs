//! Gateways for loading merge request data from GitLab.
//!
//! The trait seam lets the report pipeline run against mocks in tests while
//! [`GitLabGateway`] performs real HTTP requests through `reqwest`.

mod client;
mod error_mapping;
mod http_utils;
mod merge_requests;

pub use merge_requests::GitLabGateway;

use async_trait::async_trait;

use crate::gitlab::error::ReportError;
use crate::gitlab::models::{Discussion, MergeRequest, Note};
use crate::gitlab::project::{CreatedWindow, MergeRequestIid};

/// Gateway that can load merge requests and their comments for one project.
///
/// Every list operation returns the complete collection in server order,
/// following pagination until the last page.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MergeRequestGateway: Send + Sync {
    /// List every merge request created inside the window, in any state.
    async fn merge_requests(
        &self,
        window: &CreatedWindow,
    ) -> Result<Vec<MergeRequest>, ReportError>;

    /// Fetch a single merge request.
    ///
    /// Library-only lookup; the report pipeline works from the listing.
    async fn merge_request(&self, iid: MergeRequestIid) -> Result<MergeRequest, ReportError>;

    /// Fetch all overview notes on the merge request.
    async fn notes(&self, iid: MergeRequestIid) -> Result<Vec<Note>, ReportError>;

    /// Fetch all discussions on the merge request, each with its notes.
    async fn discussions(&self, iid: MergeRequestIid) -> Result<Vec<Discussion>, ReportError>;
}
