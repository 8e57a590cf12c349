// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::Serialize;

use crate::SortDescriptor;

/// Backend side filter, sent along w/ every request when set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub company_id: Option<String>,
}

/// A snapshot of the list parameters at the time a fetch was issued. The fetch task
/// owns this, so later changes to the list state don't leak into an in flight request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub page: usize,
    pub limit: usize,
    pub sort: Option<SortDescriptor>,
    pub filter: ListFilter,
}

/// JSON body for [`crate::RequestStyle::PostJson`].
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListRequestBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<&'a str>,
    pub page: usize,
    pub limit: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl ListQuery {
    #[must_use]
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page,
            limit,
            sort: None,
            filter: ListFilter::default(),
        }
    }

    #[must_use]
    pub fn to_request_body(&self) -> ListRequestBody<'_> {
        ListRequestBody {
            company_id: self.filter.company_id.as_deref(),
            page: self.page,
            limit: self.limit,
            sort: self.sort.as_ref().map(SortDescriptor::to_query_value),
        }
    }

    /// Query string pairs for [`crate::RequestStyle::GetQuery`], in a stable order.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut acc = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(sort) = &self.sort {
            acc.push(("sort", sort.to_query_value()));
        }
        if let Some(company_id) = &self.filter.company_id {
            acc.push(("companyId", company_id.clone()));
        }
        acc
    }
}
