// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{PageTokens, PageWindow, item_range, page_tokens};
use crate::ui_str;

/// Page sizes offered by the pagination control. `+` and `-` step through these.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 20, 50, 100];

/// What the pagination control asks the list state container to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaginationIntent {
    GoToPage(usize),
    ChangePageSize(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavButton {
    First,
    Prev,
    Next,
    Last,
}

/// Everything the pagination control needs to render itself. This is a pure function
/// of (current page, total pages, page size, total items).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationModel {
    pub tokens: PageTokens,
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub total_items: usize,
}

impl PaginationModel {
    #[must_use]
    pub fn new(
        current_page: usize,
        total_pages: usize,
        page_size: usize,
        total_items: usize,
    ) -> Self {
        Self {
            tokens: page_tokens(current_page, total_pages),
            current_page,
            total_pages,
            page_size,
            total_items,
        }
    }

    #[must_use]
    pub fn from_window(window: &PageWindow) -> Self {
        Self::new(
            window.current_page(),
            window.total_pages(),
            window.page_size(),
            window.total_items(),
        )
    }

    /// First & prev are disabled on page 1 (or before it).
    #[must_use]
    pub fn can_go_back(&self) -> bool { self.current_page > 1 }

    /// Next & last are disabled on the last page. With no pages at all, they are
    /// disabled too.
    #[must_use]
    pub fn can_go_forward(&self) -> bool { self.current_page < self.total_pages }

    /// The page a navigation button goes to, or `None` if the button is disabled.
    #[must_use]
    pub fn nav_target(&self, button: NavButton) -> Option<usize> {
        match button {
            NavButton::First => self.can_go_back().then_some(1),
            NavButton::Prev => self.can_go_back().then(|| self.current_page - 1),
            NavButton::Next => self.can_go_forward().then(|| self.current_page + 1),
            NavButton::Last => self.can_go_forward().then_some(self.total_pages),
        }
    }

    #[must_use]
    pub fn intent_for(&self, button: NavButton) -> Option<PaginationIntent> {
        self.nav_target(button).map(PaginationIntent::GoToPage)
    }

    /// eg: `Showing 11-20 of 95`.
    #[must_use]
    pub fn summary(&self) -> String {
        let (first, last) = item_range(self.current_page, self.page_size, self.total_items);
        ui_str::showing_range(first, last, self.total_items)
    }

    /// The next bigger entry in [`PAGE_SIZE_OPTIONS`], if any.
    #[must_use]
    pub fn larger_page_size(&self) -> Option<PaginationIntent> {
        PAGE_SIZE_OPTIONS
            .iter()
            .find(|&&it| it > self.page_size)
            .map(|&it| PaginationIntent::ChangePageSize(it))
    }

    /// The next smaller entry in [`PAGE_SIZE_OPTIONS`], if any.
    #[must_use]
    pub fn smaller_page_size(&self) -> Option<PaginationIntent> {
        PAGE_SIZE_OPTIONS
            .iter()
            .rev()
            .find(|&&it| it < self.page_size)
            .map(|&it| PaginationIntent::ChangePageSize(it))
    }
}
