//! GitLab merge request access.
//!
//! This module wraps the GitLab v4 REST API behind a mockable gateway trait,
//! reconstructs paginated collections in server order, and maps transport and
//! HTTP failures into [`ReportError`] variants that the CLI can display.

pub mod error;
pub mod gateway;
pub mod models;
pub mod pagination;
pub mod project;

pub use error::ReportError;
pub use gateway::{GitLabGateway, MergeRequestGateway};
pub use models::{Discussion, MergeRequest, MergeRequestState, Note};
pub use pagination::PageInfo;
pub use project::{ApiBase, CreatedWindow, MergeRequestIid, PersonalAccessToken, ProjectId};

#[cfg(test)]
pub use gateway::MockMergeRequestGateway;
