//! Scenario state and runtime/server initialization for the report export
//! BDD tests.

use mrtally::{ExportSummary, ReportError};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tempfile::TempDir;
use wiremock::{Mock, MockServer};

use super::runtime::StepRuntime;

/// Scenario state for report export tests.
#[derive(ScenarioState, Default)]
pub(crate) struct ReportState {
    pub(crate) runtime: Slot<StepRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) workspace: Slot<TempDir>,
    pub(crate) merge_request_count: Slot<u64>,
    pub(crate) summary: Slot<ExportSummary>,
    pub(crate) error: Slot<ReportError>,
}

/// Ensures the runtime and server are initialized in `ReportState`.
pub(crate) fn ensure_runtime_and_server(
    report_state: &ReportState,
) -> Result<StepRuntime, ReportError> {
    super::runtime::runtime_with_server(&report_state.runtime, &report_state.server).map_err(
        |error| ReportError::Io {
            message: format!("failed to start Tokio runtime: {error}"),
        },
    )
}

/// Mounts every mock on the scenario's server.
pub(crate) fn mount_all(
    report_state: &ReportState,
    mocks: Vec<Mock>,
) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = ensure_runtime_and_server(report_state)?;

    report_state
        .server
        .with_ref(|server| {
            runtime.block_on(async {
                for mock in mocks {
                    mock.mount(server).await;
                }
            });
        })
        .ok_or("mock server not initialised")?;

    Ok(())
}
