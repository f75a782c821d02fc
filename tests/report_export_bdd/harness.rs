//! Mock GitLab endpoints for the report export BDD tests.

use mrtally::gitlab::models::test_support::{discussion_json, merge_request_json, note_json};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

pub(crate) const API_PREFIX: &str = "/api/v4";
pub(crate) const PROJECT_ID: &str = "42";
pub(crate) const TOKEN: &str = "glpat-bdd";

fn merge_requests_path() -> String {
    format!("{API_PREFIX}/projects/{PROJECT_ID}/merge_requests")
}

fn merge_request_path(iid: u64, resource: &str) -> String {
    format!("{}/{iid}/{resource}", merge_requests_path())
}

/// Odd iids are open, even iids merged.
const fn state_for(iid: u64) -> &'static str {
    if iid & 1 == 0 { "merged" } else { "opened" }
}

/// One mock per listing page, each advertising the total page count.
pub(crate) fn merge_request_page_mocks(count: u64, per_page: usize) -> Vec<Mock> {
    let iids: Vec<u64> = (1..=count).collect();
    let pages: Vec<&[u64]> = if iids.is_empty() {
        vec![iids.as_slice()]
    } else {
        iids.chunks(per_page.max(1)).collect()
    };
    let total_pages = pages.len();

    pages
        .into_iter()
        .zip(1_usize..)
        .map(|(page_iids, page)| {
            let body: Vec<_> = page_iids
                .iter()
                .map(|&iid| merge_request_json(iid, state_for(iid)))
                .collect();
            Mock::given(method("GET"))
                .and(path(merge_requests_path()))
                .and(header("private-token", TOKEN))
                .and(query_param("state", "all"))
                .and(query_param("page", page.to_string()))
                .respond_with(
                    ResponseTemplate::new(200)
                        .insert_header("x-total-pages", total_pages.to_string())
                        .set_body_json(body),
                )
        })
        .collect()
}

/// Notes and discussions for each merge request: two user notes in the
/// overview and three user notes across two discussions, plus system notes
/// that must not be counted.
pub(crate) fn comment_mocks(count: u64) -> Vec<Mock> {
    (1..=count)
        .flat_map(|iid| {
            let notes = json!([note_json(1, false), note_json(2, true), note_json(3, false)]);
            let discussions = json!([
                discussion_json("first", &[note_json(10, false), note_json(11, false)]),
                discussion_json("second", &[note_json(12, true), note_json(13, false)]),
            ]);
            [
                Mock::given(method("GET"))
                    .and(path(merge_request_path(iid, "notes")))
                    .respond_with(ResponseTemplate::new(200).set_body_json(notes)),
                Mock::given(method("GET"))
                    .and(path(merge_request_path(iid, "discussions")))
                    .respond_with(ResponseTemplate::new(200).set_body_json(discussions)),
            ]
        })
        .collect()
}

/// Every listing request fails with 401.
pub(crate) fn rejected_token_mock() -> Mock {
    Mock::given(method("GET"))
        .and(path(merge_requests_path()))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "401 Unauthorized"
        })))
}

/// Overrides the notes endpoint of one merge request with an error status.
pub(crate) fn failing_notes_mock(iid: u64, status: u16) -> Mock {
    Mock::given(method("GET"))
        .and(path(merge_request_path(iid, "notes")))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({
            "message": "Internal Server Error"
        })))
        .with_priority(1)
}
