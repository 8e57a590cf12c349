// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use super::FetchState;
use crate::{CommonResult, DEBUG_GRID_MOD, GridError, ListFilter, ListPage, ListQuery,
            PageWindow, PaginationModel, Record, SortState, ui_str};

/// Tags each issued fetch. Tickets are strictly increasing per [`ListState`], and only
/// the response for the latest one is ever applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(pub u64);

impl Display for FetchTicket {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "#{}", self.0) }
}

/// What [`ListState::begin_fetch`] hands back: the ticket to apply the result with,
/// and a snapshot of the parameters to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingFetch {
    pub ticket: FetchTicket,
    pub query: ListQuery,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The result (records, or failure) is now the visible state.
    Applied,
    /// The records were applied, but the new total no longer reaches the current page,
    /// so the page was clamped. The records on screen belong to the old page number,
    /// and the caller should fetch again.
    AppliedPageClamped,
    /// A newer fetch was issued after this one. Nothing changed.
    DiscardedStale,
}

/// The list state container. It exclusively owns the records, the fetch lifecycle,
/// the page window, the sort, and the filter. Renderers only ever get a `&ListState`.
///
/// All mutation happens on one task (the main event loop). Fetches themselves run
/// elsewhere and come back through [`ListState::apply_fetch_result`]. Here's the
/// lifecycle:
///
/// ```text
/// set_page / set_page_size / toggle_sort / set_company_id
///        │
///        ▼
/// begin_fetch() ──► PendingFetch { ticket, query } ──► fetcher (async)
///                                                         │
/// apply_fetch_result(ticket, result) ◄────────────────────┘
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListState {
    records: Vec<Record>,
    fetch_state: FetchState,
    window: PageWindow,
    sort_state: SortState,
    filter: ListFilter,
    latest_ticket: FetchTicket,
}

impl ListState {
    /// # Errors
    ///
    /// Returns [`GridError::InvalidPageSize`] if `page_size` is 0.
    pub fn new(page_size: usize, filter: ListFilter) -> Result<Self, GridError> {
        Ok(Self {
            window: PageWindow::new(page_size)?,
            filter,
            ..Default::default()
        })
    }

    #[must_use]
    pub fn records(&self) -> &[Record] { &self.records }

    #[must_use]
    pub fn fetch_state(&self) -> &FetchState { &self.fetch_state }

    #[must_use]
    pub fn is_loading(&self) -> bool { self.fetch_state.is_loading() }

    #[must_use]
    pub fn error(&self) -> Option<&str> { self.fetch_state.error() }

    #[must_use]
    pub fn window(&self) -> &PageWindow { &self.window }

    #[must_use]
    pub fn current_page(&self) -> usize { self.window.current_page() }

    #[must_use]
    pub fn page_size(&self) -> usize { self.window.page_size() }

    #[must_use]
    pub fn total_items(&self) -> usize { self.window.total_items() }

    #[must_use]
    pub fn total_pages(&self) -> usize { self.window.total_pages() }

    #[must_use]
    pub fn bounded_total_pages(&self) -> usize { self.window.bounded_total_pages() }

    #[must_use]
    pub fn sort_state(&self) -> &SortState { &self.sort_state }

    #[must_use]
    pub fn filter(&self) -> &ListFilter { &self.filter }

    #[must_use]
    pub fn latest_ticket(&self) -> FetchTicket { self.latest_ticket }

    #[must_use]
    pub fn pagination_model(&self) -> PaginationModel {
        PaginationModel::from_window(&self.window)
    }

    /// Returns the page that was actually set, after clamping.
    pub fn set_page(&mut self, page: usize) -> usize { self.window.set_page(page) }

    /// Always goes back to page 1.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidPageSize`] if `page_size` is 0, and leaves the state
    /// alone.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), GridError> {
        self.window.set_page_size(page_size)
    }

    pub fn set_sort(&mut self, sort_state: SortState) { self.sort_state = sort_state; }

    pub fn toggle_sort(&mut self, field_id: &str) { self.sort_state.toggle(field_id); }

    pub fn set_filter(&mut self, filter: ListFilter) { self.filter = filter; }

    pub fn set_company_id(&mut self, company_id: impl Into<String>) {
        self.filter.company_id = Some(company_id.into());
    }

    /// The parameters the next fetch would send.
    #[must_use]
    pub fn current_query(&self) -> ListQuery {
        ListQuery {
            page: self.window.current_page(),
            limit: self.window.page_size(),
            sort: self.sort_state.descriptor().cloned(),
            filter: self.filter.clone(),
        }
    }

    /// Marks the list as loading, clears the previous error, and issues a new ticket.
    /// Any fetch that is still in flight is superseded by this one.
    pub fn begin_fetch(&mut self) -> PendingFetch {
        self.latest_ticket = FetchTicket(self.latest_ticket.0 + 1);
        self.fetch_state = FetchState::Loading;

        let pending = PendingFetch {
            ticket: self.latest_ticket,
            query: self.current_query(),
        };

        DEBUG_GRID_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "📦 begin_fetch",
                ticket = %pending.ticket,
                query = ?pending.query,
            );
        });

        pending
    }

    /// Applies the result of the fetch tagged w/ `ticket`.
    ///
    /// - Stale tickets are dropped on the floor.
    /// - A page replaces the records and the total.
    /// - A failure clears the records and stores [`ui_str::FETCH_FAILED_MESSAGE`]. The
    ///   real cause is only logged, since it isn't meant for the user.
    ///
    /// Either way, the list stops loading.
    pub fn apply_fetch_result(
        &mut self,
        ticket: FetchTicket,
        result: CommonResult<ListPage>,
    ) -> ApplyOutcome {
        if ticket != self.latest_ticket {
            DEBUG_GRID_MOD.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "📦 Discarding stale fetch result",
                    ticket = %ticket,
                    latest_ticket = %self.latest_ticket,
                );
            });
            return ApplyOutcome::DiscardedStale;
        }

        match result {
            Ok(page) => {
                self.records = page.records;
                self.fetch_state = FetchState::Idle;
                let page_was_clamped = self.window.set_total_items(page.total_items);

                DEBUG_GRID_MOD.then(|| {
                    // % is Display, ? is Debug.
                    tracing::debug!(
                        message = "📦 Applied fetch result",
                        ticket = %ticket,
                        window = %self.window,
                        page_was_clamped = %page_was_clamped,
                    );
                });

                if page_was_clamped {
                    ApplyOutcome::AppliedPageClamped
                } else {
                    ApplyOutcome::Applied
                }
            }
            Err(report) => {
                // % is Display, ? is Debug.
                tracing::error!(
                    message = "📦 Fetch failed",
                    ticket = %ticket,
                    error = ?report,
                );
                self.records.clear();
                self.fetch_state = FetchState::Failed(ui_str::FETCH_FAILED_MESSAGE.into());
                ApplyOutcome::Applied
            }
        }
    }
}
