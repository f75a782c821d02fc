//! Merge request comment report.
//!
//! Counts user-authored comments for every merge request, assembles one
//! [`ReportRow`] per merge request in fetch order, and writes the rows as
//! CSV.
//!
//! # Columns
//!
//! `Merge Request ID,Merge Request URL,State,Opened Date,Closed Date,Comments`
//!
//! The closed date falls back to the merge date and then to the literal
//! `opened`.

mod builder;
mod comments;
mod csv;
mod export;
mod model;

pub use builder::{Concurrency, DEFAULT_CONCURRENCY, ReportBuilder};
pub use comments::{CommentCounts, count_comments};
pub use csv::{CSV_HEADER, DEFAULT_OUTPUT_FILE, write_csv, write_report_file};
pub use export::{ExportSummary, export_report};
pub use model::{ClosedDate, ReportRow};
