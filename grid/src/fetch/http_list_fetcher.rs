// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{future::Future, time::Duration};

use reqwest::{Client, Response, Url,
              header::{CONTENT_TYPE, HeaderMap, HeaderValue}};

use super::{ListFetcher, ListQuery};
use crate::{CommonResult, DEBUG_GRID_FETCH, GridError, IdentityField, ListPage};

mod constants {
    pub const USER_AGENT: &str = concat!("r3bl_grid/", env!("CARGO_PKG_VERSION"));
}

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// How the list parameters are sent to the endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum RequestStyle {
    /// `POST` w/ a JSON body: `{ companyId, page, limit, sort }`.
    #[default]
    #[value(name = "post")]
    PostJson,
    /// `GET` w/ query params: `?page=1&limit=10&sort=regDate:desc&companyId=2`.
    #[value(name = "get")]
    GetQuery,
}

/// Talks to a remote list endpoint over HTTP.
#[derive(Debug, Clone)]
pub struct HttpListFetcher {
    client: Client,
    url: Url,
    request_style: RequestStyle,
    identity_field: IdentityField,
}

impl HttpListFetcher {
    /// # Errors
    ///
    /// Returns [`GridError::HttpClient`] if the TLS backend can't be initialized.
    pub fn try_new(
        url: Url,
        request_style: RequestStyle,
        identity_field: IdentityField,
        timeout: Duration,
    ) -> Result<Self, GridError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent(constants::USER_AGENT)
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(GridError::HttpClient)?;

        Ok(Self {
            client,
            url,
            request_style,
            identity_field,
        })
    }

    #[must_use]
    pub fn url(&self) -> &Url { &self.url }
}

/// Works out the URL of the list endpoint.
///
/// - An absolute `endpoint` (`http://` or `https://`) is used as is, and `base_url`
///   is ignored.
/// - Otherwise `endpoint` is a path that is joined onto `base_url`, w/ exactly one `/`
///   between them.
///
/// # Errors
///
/// - [`GridError::MissingBaseUrl`] if `endpoint` is relative and there's no base URL.
/// - [`GridError::InvalidUrl`] if the result doesn't parse.
pub fn resolve_list_url(base_url: Option<&str>, endpoint: &str) -> Result<Url, GridError> {
    let endpoint = endpoint.trim();
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        return parse_url(endpoint);
    }

    let Some(base_url) = base_url.map(str::trim).filter(|it| !it.is_empty()) else {
        return Err(GridError::MissingBaseUrl);
    };

    if endpoint.is_empty() {
        return parse_url(base_url);
    }

    parse_url(&format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    ))
}

fn parse_url(url: &str) -> Result<Url, GridError> {
    Url::parse(url).map_err(|error| GridError::InvalidUrl {
        url: url.to_string(),
        reason: error.to_string(),
    })
}

impl ListFetcher for HttpListFetcher {
    fn fetch_page(
        &self,
        query: ListQuery,
    ) -> impl Future<Output = CommonResult<ListPage>> + Send {
        let request = match self.request_style {
            RequestStyle::PostJson => self
                .client
                .post(self.url.clone())
                .json(&query.to_request_body()),
            RequestStyle::GetQuery => self
                .client
                .get(self.url.clone())
                .query(&query.to_query_pairs()),
        };
        let url = self.url.to_string();
        let identity_field = self.identity_field.clone();

        async move {
            DEBUG_GRID_FETCH.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "🌐 Requesting list page",
                    url = %url,
                    query = ?query,
                );
            });

            let to_http_error = |source: reqwest::Error| GridError::Http {
                url: url.clone(),
                source,
            };

            let response = request
                .send()
                .await
                .and_then(Response::error_for_status)
                .map_err(to_http_error)?;
            let bytes = response.bytes().await.map_err(to_http_error)?;

            let page = ListPage::try_from_slice(&bytes)?.validated(&identity_field)?;

            DEBUG_GRID_FETCH.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "🌐 Received list page",
                    url = %url,
                    records = %page.records.len(),
                    total_items = %page.total_items,
                    server_message = ?page.server_message,
                );
            });

            Ok(page)
        }
    }
}
