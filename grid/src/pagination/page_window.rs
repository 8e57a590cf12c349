// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use crate::GridError;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// The (page number, page size, total count) triple that drives pagination.
///
/// Invariants, which is why the fields are private:
/// - `page_size > 0`.
/// - `1 <= current_page <= max(total_pages, 1)`, once the total is known. Until the
///   first response arrives the total is 0, so the only valid page is 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    current_page: usize,
    page_size: usize,
    total_items: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_items: 0,
        }
    }
}

impl PageWindow {
    /// # Errors
    ///
    /// Returns [`GridError::InvalidPageSize`] if `page_size` is 0.
    pub fn new(page_size: usize) -> std::result::Result<Self, GridError> {
        let mut it = Self::default();
        it.set_page_size(page_size)?;
        Ok(it)
    }

    #[must_use]
    pub fn current_page(&self) -> usize { self.current_page }

    #[must_use]
    pub fn page_size(&self) -> usize { self.page_size }

    #[must_use]
    pub fn total_items(&self) -> usize { self.total_items }

    /// `ceil(total_items / page_size)`. This is 0 when there are no items.
    #[must_use]
    pub fn total_pages(&self) -> usize { self.total_items.div_ceil(self.page_size) }

    /// [`Self::total_pages`], w/ 0 treated as 1 for bounds purposes.
    #[must_use]
    pub fn bounded_total_pages(&self) -> usize { self.total_pages().max(1) }

    /// Moves to `page`, clamped into `[1, bounded_total_pages]`. Returns the page that
    /// was actually set.
    pub fn set_page(&mut self, page: usize) -> usize {
        self.current_page = page.clamp(1, self.bounded_total_pages());
        self.current_page
    }

    /// Always resets the current page to 1, even if the size doesn't change.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidPageSize`] if `page_size` is 0, in which case
    /// nothing changes.
    pub fn set_page_size(&mut self, page_size: usize) -> std::result::Result<(), GridError> {
        if page_size == 0 {
            return Err(GridError::InvalidPageSize { page_size });
        }
        self.page_size = page_size;
        self.current_page = 1;
        Ok(())
    }

    /// Records the total reported by the backend. Returns `true` if the current page
    /// is now out of bounds and had to be clamped.
    pub fn set_total_items(&mut self, total_items: usize) -> bool {
        self.total_items = total_items;
        let requested = self.current_page;
        self.set_page(requested) != requested
    }

    /// 1 based index of the first and last item on the current page. Both are 0 when
    /// there are no items.
    #[must_use]
    pub fn item_range(&self) -> (usize, usize) {
        item_range(self.current_page, self.page_size, self.total_items)
    }
}

/// 1 based `(first, last)` item on `current_page`, both 0 when `total_items` is 0. The
/// total comes from the backend, so the math saturates instead of overflowing.
#[must_use]
pub fn item_range(current_page: usize, page_size: usize, total_items: usize) -> (usize, usize) {
    if total_items == 0 {
        return (0, 0);
    }
    let first = (current_page.max(1) - 1)
        .saturating_mul(page_size)
        .saturating_add(1)
        .min(total_items);
    let last = first
        .saturating_add(page_size.saturating_sub(1))
        .min(total_items);
    (first, last)
}

impl Display for PageWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "PageWindow[page={}/{}, size={}, total={}]",
            self.current_page,
            self.bounded_total_pages(),
            self.page_size,
            self.total_items
        )
    }
}
