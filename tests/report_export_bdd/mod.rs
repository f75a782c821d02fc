//! Support modules for the report export BDD tests.

pub(crate) mod harness;
#[path = "../support/runtime.rs"]
pub(crate) mod runtime;
pub(crate) mod state;

pub(crate) use harness::{
    API_PREFIX, PROJECT_ID, TOKEN, comment_mocks, merge_request_page_mocks,
    rejected_token_mock, failing_notes_mock,
};
pub(crate) use state::{ReportState, ensure_runtime_and_server, mount_all};
