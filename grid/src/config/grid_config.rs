// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use reqwest::Url;

use super::CLIArg;
use crate::{ColumnDef, GridError, HttpListFetcher, IdentityField, ListFilter, ListState,
            RequestStyle, event_table_columns, resolve_list_url};

/// Everything the app needs to start, validated. Built from the command line (and the
/// environment, via clap).
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    pub list_url: Url,
    pub request_style: RequestStyle,
    pub filter: ListFilter,
    pub page_size: usize,
    pub identity_field: IdentityField,
    pub timeout: Duration,
    pub columns: Vec<ColumnDef>,
    /// The bin sets up the `log.txt` file layer when this is on.
    pub enable_logging: bool,
}

impl TryFrom<&CLIArg> for GridConfig {
    type Error = GridError;

    fn try_from(cli_arg: &CLIArg) -> Result<Self, Self::Error> {
        if cli_arg.page_size == 0 {
            return Err(GridError::InvalidPageSize {
                page_size: cli_arg.page_size,
            });
        }

        let list_url = resolve_list_url(cli_arg.base_url.as_deref(), &cli_arg.endpoint)?;

        let company_id = cli_arg.company_id.trim();
        let filter = ListFilter {
            company_id: (!company_id.is_empty()).then(|| company_id.to_string()),
        };

        let identity_field = if cli_arg.no_id_field {
            IdentityField::RowPosition
        } else {
            IdentityField::Named(cli_arg.id_field.clone())
        };

        let columns = if cli_arg.columns.is_empty() {
            event_table_columns()
        } else {
            cli_arg.columns.iter().map(|it| parse_column_spec(it)).collect()
        };

        Ok(Self {
            list_url,
            request_style: cli_arg.method,
            filter,
            page_size: cli_arg.page_size,
            identity_field,
            timeout: Duration::from_secs(cli_arg.timeout_secs),
            columns,
            enable_logging: cli_arg.global_options.enable_logging,
        })
    }
}

impl GridConfig {
    /// # Errors
    ///
    /// See [`HttpListFetcher::try_new`].
    pub fn try_create_fetcher(&self) -> Result<HttpListFetcher, GridError> {
        HttpListFetcher::try_new(
            self.list_url.clone(),
            self.request_style,
            self.identity_field.clone(),
            self.timeout,
        )
    }

    /// # Errors
    ///
    /// See [`ListState::new`].
    pub fn try_create_list_state(&self) -> Result<ListState, GridError> {
        ListState::new(self.page_size, self.filter.clone())
    }
}

/// `field` or `field:Header`. Without a header, the field id is the header.
#[must_use]
pub fn parse_column_spec(spec: &str) -> ColumnDef {
    match spec.split_once(':') {
        Some((id, header)) if !header.trim().is_empty() => {
            ColumnDef::new(id.trim(), header.trim())
        }
        Some((id, _)) => ColumnDef::new(id.trim(), id.trim()),
        None => ColumnDef::new(spec.trim(), spec.trim()),
    }
}
