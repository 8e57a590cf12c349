// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use miette::Diagnostic;

/// Type alias to make it easy to work with [miette::Result] and [miette::Report].
/// Works hand in hand w/ [`GridError`], and any other type of error that can be turned
/// into a [`miette::Report`].
pub type CommonResult<T> = miette::Result<T>;

/// All the things that can go wrong in this crate. Each variant carries a diagnostic
/// code so that the fancy [`miette`] report printed on exit points at the culprit.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum GridError {
    #[error("Page size must be greater than zero, got {page_size}")]
    #[diagnostic(
        code(r3bl_grid::page_size),
        help("Pass a positive number to `--page-size`")
    )]
    InvalidPageSize { page_size: usize },

    #[error("No base URL for the list endpoint was provided")]
    #[diagnostic(
        code(r3bl_grid::config::missing_base_url),
        help("Set the `GRID_API_BASE_URL` env var, or pass `--base-url`")
    )]
    MissingBaseUrl,

    #[error("Invalid URL `{url}`: {reason}")]
    #[diagnostic(
        code(r3bl_grid::config::invalid_url),
        help("URLs look like `http://localhost:8080`, w/ an endpoint like `/gw/v1/RiskAreaList`")
    )]
    InvalidUrl { url: String, reason: String },

    #[error("Could not build the HTTP client")]
    #[diagnostic(code(r3bl_grid::config::http_client))]
    HttpClient(#[source] reqwest::Error),

    #[error("Request to the list endpoint failed: {url}")]
    #[diagnostic(
        code(r3bl_grid::fetch::http),
        help("Check that the server is running and the endpoint path is correct")
    )]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Could not decode the list response: {reason}")]
    #[diagnostic(code(r3bl_grid::fetch::decode))]
    Decode { reason: String },

    #[error("Record identity `{id}` for field `{field}` appears more than once in a page")]
    #[diagnostic(
        code(r3bl_grid::fetch::duplicate_record_id),
        help("Pick an identity field that is unique, via `--id-field`")
    )]
    DuplicateRecordId { field: String, id: String },

    #[error("Terminal I/O failed")]
    #[diagnostic(code(r3bl_grid::terminal))]
    Terminal(#[source] std::io::Error),
}

impl From<std::io::Error> for GridError {
    fn from(error: std::io::Error) -> Self { GridError::Terminal(error) }
}

impl GridError {
    /// Convenience for the decode path, which builds its reason from format strings.
    pub fn decode(reason: impl Into<String>) -> Self {
        GridError::Decode {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_error_messages() {
        let error = GridError::InvalidPageSize { page_size: 0 };
        assert_eq!(error.to_string(), "Page size must be greater than zero, got 0");

        let error = GridError::decode("missing `items`");
        assert_eq!(
            error.to_string(),
            "Could not decode the list response: missing `items`"
        );

        let error = GridError::DuplicateRecordId {
            field: "id".into(),
            id: "7".into(),
        };
        assert_eq!(
            error.to_string(),
            "Record identity `7` for field `id` appears more than once in a page"
        );
    }

    #[test]
    fn test_error_converts_into_report() {
        let result: CommonResult<()> = Err(GridError::MissingBaseUrl.into());
        let report = result.unwrap_err();
        assert!(report.downcast_ref::<GridError>().is_some());
    }
}
