//! End-to-end report export: fetch, count, write.

use camino::Utf8PathBuf;

use crate::config::ReportSettings;
use crate::gitlab::{MergeRequestGateway, ReportError};

use super::builder::ReportBuilder;
use super::csv::write_report_file;

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Merge requests fetched, which equals the number of CSV rows.
    pub merge_requests: usize,
    /// Path of the written CSV file.
    pub output: Utf8PathBuf,
}

/// Fetches every merge request in the configured window, counts its comments
/// and writes the CSV to `settings.output`.
///
/// The file is only opened once every row has been built, so a failed run
/// leaves any previous report untouched.
///
/// # Errors
///
/// Returns the first gateway failure, or [`ReportError::Io`] when the file
/// cannot be written.
pub async fn export_report<Gateway>(
    gateway: &Gateway,
    settings: &ReportSettings,
) -> Result<ExportSummary, ReportError>
where
    Gateway: MergeRequestGateway,
{
    let merge_requests = gateway.merge_requests(&settings.window).await?;
    tracing::info!(
        count = merge_requests.len(),
        created_after = settings.window.created_after(),
        created_before = settings.window.created_before(),
        "fetched merge requests"
    );

    let rows = ReportBuilder::new(gateway)
        .with_concurrency(settings.concurrency)
        .build(&merge_requests)
        .await?;

    write_report_file(&settings.output, &rows)?;
    tracing::info!(path = %settings.output, rows = rows.len(), "wrote report");

    Ok(ExportSummary {
        merge_requests: merge_requests.len(),
        output: settings.output.clone(),
    })
}
