//! mrtally CLI entrypoint: exports GitLab merge request comment counts to
//! CSV.

use std::io::{self, Write};
use std::process::ExitCode;

use mrtally::{ExportSummary, GitLabGateway, MrTallyConfig, ReportError, export_report, logging};
use ortho_config::OrthoConfig;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ReportError> {
    let dotenv = dotenvy::dotenv();
    logging::init();
    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded environment file"),
        Err(error) if error.not_found() => {}
        Err(error) => tracing::warn!(%error, "failed to load .env file"),
    }

    let settings = load_config()?.resolve()?;

    let gateway = GitLabGateway::for_token(&settings.token, &settings.api_base, &settings.project)?;
    let summary = export_report(&gateway, &settings).await?;

    write_summary(&summary)
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ReportError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<MrTallyConfig, ReportError> {
    MrTallyConfig::load().map_err(|error| ReportError::Configuration {
        message: error.to_string(),
    })
}

fn write_summary(summary: &ExportSummary) -> Result<(), ReportError> {
    let mut stdout = io::stdout().lock();
    writeln!(
        stdout,
        "Fetched {} merge requests\nCSV file generated: {}",
        summary.merge_requests, summary.output
    )
    .map_err(|error| ReportError::Io {
        message: error.to_string(),
    })
}
