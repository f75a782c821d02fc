//! mrtally library crate providing GitLab merge request comment reports.
//!
//! The library loads layered configuration, pages through the GitLab REST
//! API for merge requests, notes and discussions, counts user-authored
//! comments per merge request, and serializes the result as CSV.

pub mod config;
pub mod gitlab;
pub mod logging;
pub mod report;

pub use config::{MrTallyConfig, ReportSettings};
pub use gitlab::{
    ApiBase, CreatedWindow, Discussion, GitLabGateway, MergeRequest, MergeRequestGateway,
    MergeRequestIid, MergeRequestState, Note, PersonalAccessToken, ProjectId, ReportError,
};
pub use report::{
    CSV_HEADER, ClosedDate, CommentCounts, Concurrency, ExportSummary, ReportBuilder, ReportRow,
    count_comments, export_report, write_csv, write_report_file,
};
