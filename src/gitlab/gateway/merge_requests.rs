//! `reqwest`-backed merge request gateway.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::gitlab::error::ReportError;
use crate::gitlab::models::{
    ApiDiscussion, ApiMergeRequest, ApiNote, Discussion, MergeRequest, Note,
};
use crate::gitlab::pagination::{MAX_PER_PAGE, PageInfo};
use crate::gitlab::project::{
    ApiBase, CreatedWindow, MergeRequestIid, PersonalAccessToken, ProjectId,
};

use super::MergeRequestGateway;
use super::client::build_http_client;
use super::error_mapping::{map_http_error, map_reqwest_error};

/// GitLab REST gateway scoped to one project.
pub struct GitLabGateway {
    client: Client,
    api_base: ApiBase,
    project: ProjectId,
}

impl GitLabGateway {
    /// Creates a gateway from an already configured client.
    ///
    /// The client is expected to send the `PRIVATE-TOKEN` header itself.
    #[must_use]
    pub const fn new(client: Client, api_base: ApiBase, project: ProjectId) -> Self {
        Self {
            client,
            api_base,
            project,
        }
    }

    /// Builds a gateway that authenticates with the given token.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Configuration`] when the token is not a valid
    /// header value, or [`ReportError::Network`] when the client cannot be
    /// built.
    pub fn for_token(
        token: &PersonalAccessToken,
        api_base: &ApiBase,
        project: &ProjectId,
    ) -> Result<Self, ReportError> {
        let client = build_http_client(token)?;
        Ok(Self::new(client, api_base.clone(), project.clone()))
    }

    /// URL of `{base}/projects/{id}/{tail...}` with the project id encoded as
    /// one segment.
    fn project_endpoint(&self, tail: &[&str]) -> Result<Url, ReportError> {
        self.api_base.endpoint(
            ["projects", self.project.as_str()]
                .into_iter()
                .chain(tail.iter().copied()),
        )
    }

    fn merge_request_endpoint(
        &self,
        iid: MergeRequestIid,
        resource: Option<&str>,
    ) -> Result<Url, ReportError> {
        let iid_segment = iid.to_string();
        match resource {
            Some(name) => self.project_endpoint(&["merge_requests", iid_segment.as_str(), name]),
            None => self.project_endpoint(&["merge_requests", iid_segment.as_str()]),
        }
    }

    /// Sends the request and maps non-success statuses into errors carrying
    /// the server's message.
    async fn send(operation: &str, request: RequestBuilder) -> Result<Response, ReportError> {
        let response = request
            .send()
            .await
            .map_err(|error| map_reqwest_error(operation, &error))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(map_http_error(operation, status, &body))
    }

    async fn decode<T: DeserializeOwned>(
        operation: &str,
        response: Response,
    ) -> Result<T, ReportError> {
        let body = response
            .bytes()
            .await
            .map_err(|error| map_reqwest_error(operation, &error))?;
        serde_json::from_slice(&body).map_err(|error| ReportError::Decode {
            message: format!("{operation}: {error}"),
        })
    }

    async fn fetch_page<T>(
        &self,
        operation: &str,
        url: &Url,
        query: &[(&str, &str)],
        page: u32,
    ) -> Result<(Vec<T>, PageInfo), ReportError>
    where
        T: DeserializeOwned + Send,
    {
        let page_param = page.to_string();
        let per_page_param = MAX_PER_PAGE.to_string();
        let request = self.client.get(url.clone()).query(query).query(&[
            ("per_page", per_page_param.as_str()),
            ("page", page_param.as_str()),
        ]);

        let response = Self::send(operation, request).await?;
        let page_info = PageInfo::from_headers(page, MAX_PER_PAGE, response.headers());
        let items: Vec<T> = Self::decode(operation, response).await?;

        tracing::debug!(
            operation,
            page,
            total_pages = page_info.total_pages(),
            items = items.len(),
            "fetched page"
        );
        Ok((items, page_info))
    }

    /// Requests pages `1..=x-total-pages` one after another and concatenates
    /// their items in page order.
    ///
    /// # Errors
    ///
    /// Propagates the first transport, status, or decoding failure. Pages
    /// already fetched are discarded.
    async fn fetch_all_pages<T>(
        &self,
        operation: &str,
        url: &Url,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, ReportError>
    where
        T: DeserializeOwned + Send,
    {
        let mut items = Vec::new();
        let mut page = 1;

        loop {
            let (batch, page_info) = self.fetch_page::<T>(operation, url, query, page).await?;
            items.extend(batch);

            match page_info.next_page() {
                Some(next) => page = next,
                None => break,
            }
        }

        Ok(items)
    }
}

#[async_trait]
impl MergeRequestGateway for GitLabGateway {
    async fn merge_requests(
        &self,
        window: &CreatedWindow,
    ) -> Result<Vec<MergeRequest>, ReportError> {
        let url = self.project_endpoint(&["merge_requests"])?;
        let query = [
            ("state", "all"),
            ("created_after", window.created_after()),
            ("created_before", window.created_before()),
        ];

        let merge_requests: Vec<ApiMergeRequest> = self
            .fetch_all_pages("list merge requests", &url, &query)
            .await?;
        merge_requests
            .into_iter()
            .map(MergeRequest::try_from)
            .collect()
    }

    async fn merge_request(&self, iid: MergeRequestIid) -> Result<MergeRequest, ReportError> {
        let operation = "merge request";
        let url = self.merge_request_endpoint(iid, None)?;
        let response = Self::send(operation, self.client.get(url)).await?;
        let merge_request: ApiMergeRequest = Self::decode(operation, response).await?;
        MergeRequest::try_from(merge_request)
    }

    async fn notes(&self, iid: MergeRequestIid) -> Result<Vec<Note>, ReportError> {
        let url = self.merge_request_endpoint(iid, Some("notes"))?;
        let notes: Vec<ApiNote> = self.fetch_all_pages("notes", &url, &[]).await?;
        Ok(notes.into_iter().map(Note::from).collect())
    }

    async fn discussions(&self, iid: MergeRequestIid) -> Result<Vec<Discussion>, ReportError> {
        let url = self.merge_request_endpoint(iid, Some("discussions"))?;
        let discussions: Vec<ApiDiscussion> =
            self.fetch_all_pages("discussions", &url, &[]).await?;
        Ok(discussions.into_iter().map(Discussion::from).collect())
    }
}
