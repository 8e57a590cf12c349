// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Where everything goes on screen, and the reverse: which part of the grid a terminal
//! position lands on.
//!
//! ```text
//! row 0                 Name ▲  │ CCTV ID │ In Use      ◄── header
//! row 1                 ────────┼─────────┼───────      ◄── separator
//! row 2..               Gate 1  │ C-01    │ Active      ◄── body rows
//!                       ...                             ◄── empty area
//! rows - 2              « ‹ 1 2 3 4 5 … 10 › »   - 10 / page +   Showing 1-10 of 95
//! rows - 1              key hints
//! ```

use unicode_width::UnicodeWidthStr;

use super::GridViewModel;
use crate::{NavButton, PageToken, Pos, Size, ui_str};

pub const MIN_COLUMN_WIDTH: u16 = 4;
pub const MAX_COLUMN_WIDTH: u16 = 30;
pub const COLUMN_SEPARATOR: &str = " │ ";
pub const COLUMN_SEPARATOR_CROSS: &str = "─┼─";

pub const HEADER_ROW: u16 = 0;
pub const SEPARATOR_ROW: u16 = 1;
pub const FIRST_BODY_ROW: u16 = 2;
/// The pagination bar and the key hints.
pub const FOOTER_ROWS: u16 = 2;

/// Room for ` ▲` so that columns don't change width when their sort is toggled.
const SORT_GLYPH_RESERVE: u16 = 2;
const PAGINATION_ITEM_GAP: u16 = 1;
const PAGINATION_GROUP_GAP: u16 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnSpan {
    pub start: u16,
    pub width: u16,
}

/// A clickable part of the pagination bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaginationHit {
    Nav(NavButton),
    Page(usize),
    SmallerPageSize,
    LargerPageSize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationItem {
    pub text: String,
    pub start: u16,
    pub hit: Option<PaginationHit>,
    pub is_current: bool,
    pub is_enabled: bool,
}

/// What is under a terminal position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    Header(usize),
    /// `row` is the display row, see [`crate::BodyRow`].
    Cell { row: usize, col: usize },
    /// Inside the body area, but not on a row.
    EmptyArea,
    Pagination(PaginationHit),
    Outside,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridLayout {
    pub viewport: Size,
    pub columns: Vec<ColumnSpan>,
    /// How many body rows fit, and are drawn.
    pub visible_rows: usize,
    pub body_height: u16,
    pub pagination_row: u16,
    pub hints_row: u16,
    pub pagination_items: Vec<PaginationItem>,
}

#[must_use]
pub fn display_width(text: &str) -> u16 {
    u16::try_from(UnicodeWidthStr::width(text)).unwrap_or(u16::MAX)
}

/// Cuts `text` down to `max_width` display columns, ending w/ `…` if anything was cut.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: u16) -> String {
    if display_width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - display_width(ui_str::PAGE_ELLIPSIS_GLYPH);
    let mut acc = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = display_width(ch.encode_utf8(&mut [0; 4]));
        if used + ch_width > budget {
            break;
        }
        used += ch_width;
        acc.push(ch);
    }
    acc.push_str(ui_str::PAGE_ELLIPSIS_GLYPH);
    acc
}

/// Pads (or truncates) `text` to exactly `width` display columns.
#[must_use]
pub fn fit_to_width(text: &str, width: u16) -> String {
    let it = truncate_to_width(text, width);
    let padding = usize::from(width.saturating_sub(display_width(&it)));
    format!("{it}{}", " ".repeat(padding))
}

impl GridLayout {
    #[must_use]
    pub fn compute(view: &GridViewModel, viewport: Size) -> Self {
        let separator_width = display_width(COLUMN_SEPARATOR);
        let mut columns = Vec::with_capacity(view.headers.len());
        let mut start = 0u16;
        for (col, header) in view.headers.iter().enumerate() {
            let reserve = if header.sortable { SORT_GLYPH_RESERVE } else { 0 };
            let header_width = display_width(&header.title).saturating_add(reserve);
            let widest_cell = view
                .rows
                .iter()
                .filter_map(|row| row.cells.get(col)?.as_deref())
                .map(display_width)
                .max()
                .unwrap_or(0);
            let width = header_width
                .max(widest_cell)
                .clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH);
            columns.push(ColumnSpan { start, width });
            start = start.saturating_add(width).saturating_add(separator_width);
        }

        let body_height = viewport.rows.saturating_sub(FIRST_BODY_ROW + FOOTER_ROWS);
        let pagination_row = FIRST_BODY_ROW + body_height;

        Self {
            viewport,
            columns,
            visible_rows: view.rows.len().min(usize::from(body_height)),
            body_height,
            pagination_row,
            hints_row: pagination_row + 1,
            pagination_items: pagination_items(view),
        }
    }

    /// Width of all the columns, and the separators between them.
    #[must_use]
    pub fn table_width(&self) -> u16 {
        self.columns
            .last()
            .map_or(0, |last| last.start.saturating_add(last.width))
    }

    #[must_use]
    pub fn body_row_to_screen(&self, row: usize) -> u16 {
        FIRST_BODY_ROW.saturating_add(u16::try_from(row).unwrap_or(u16::MAX))
    }

    fn column_at(&self, col: u16) -> Option<usize> {
        let separator_width = display_width(COLUMN_SEPARATOR);
        self.columns.iter().position(|span| {
            col >= span.start && col < span.start.saturating_add(span.width + separator_width)
        })
    }

    #[must_use]
    pub fn hit_test(&self, pos: Pos) -> HitTarget {
        if pos.col >= self.viewport.cols || pos.row >= self.viewport.rows {
            return HitTarget::Outside;
        }

        if pos.row == HEADER_ROW {
            return self
                .column_at(pos.col)
                .map_or(HitTarget::Outside, HitTarget::Header);
        }

        if pos.row >= FIRST_BODY_ROW && pos.row < self.pagination_row {
            let row = usize::from(pos.row - FIRST_BODY_ROW);
            if row >= self.visible_rows {
                return HitTarget::EmptyArea;
            }
            return self
                .column_at(pos.col)
                .map_or(HitTarget::EmptyArea, |col| HitTarget::Cell { row, col });
        }

        if pos.row == self.pagination_row {
            return self
                .pagination_items
                .iter()
                .filter(|item| item.is_enabled)
                .find(|item| {
                    pos.col >= item.start
                        && pos.col < item.start.saturating_add(display_width(&item.text))
                })
                .and_then(|item| item.hit)
                .map_or(HitTarget::Outside, HitTarget::Pagination);
        }

        HitTarget::Outside
    }
}

fn pagination_items(view: &GridViewModel) -> Vec<PaginationItem> {
    let model = &view.pagination;
    let mut acc = Vec::new();
    let mut start = 0u16;

    let mut push = |text: String, hit: Option<PaginationHit>, is_enabled, is_current, gap| {
        let width = display_width(&text);
        acc.push(PaginationItem {
            text,
            start,
            hit,
            is_current,
            is_enabled,
        });
        start = start.saturating_add(width).saturating_add(gap);
    };

    let nav = |button| (Some(PaginationHit::Nav(button)), model.nav_target(button).is_some());

    for (glyph, button) in [
        (ui_str::PAGE_FIRST_GLYPH, NavButton::First),
        (ui_str::PAGE_PREV_GLYPH, NavButton::Prev),
    ] {
        let (hit, is_enabled) = nav(button);
        push(glyph.to_string(), hit, is_enabled, false, PAGINATION_ITEM_GAP);
    }

    for token in &model.tokens {
        match token {
            PageToken::Page(page) => push(
                token.to_string(),
                Some(PaginationHit::Page(*page)),
                true,
                *page == model.current_page,
                PAGINATION_ITEM_GAP,
            ),
            PageToken::Ellipsis => {
                push(token.to_string(), None, false, false, PAGINATION_ITEM_GAP);
            }
        }
    }

    let (hit, is_enabled) = nav(NavButton::Next);
    push(ui_str::PAGE_NEXT_GLYPH.into(), hit, is_enabled, false, PAGINATION_ITEM_GAP);
    let (hit, is_enabled) = nav(NavButton::Last);
    push(ui_str::PAGE_LAST_GLYPH.into(), hit, is_enabled, false, PAGINATION_GROUP_GAP);

    push(
        "-".into(),
        Some(PaginationHit::SmallerPageSize),
        model.smaller_page_size().is_some(),
        false,
        PAGINATION_ITEM_GAP,
    );
    push(
        ui_str::page_size_label(model.page_size),
        None,
        false,
        false,
        PAGINATION_ITEM_GAP,
    );
    push(
        "+".into(),
        Some(PaginationHit::LargerPageSize),
        model.larger_page_size().is_some(),
        false,
        PAGINATION_GROUP_GAP,
    );

    push(model.summary(), None, false, false, 0);

    acc
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::{ColumnDef, ListPage, ListState, Record, pos, size};

    fn view(count: usize, total_items: usize) -> GridViewModel {
        let columns = vec![
            ColumnDef::new("name", "Name"),
            ColumnDef::new("id", "Identifier"),
        ];
        let records = (0..count)
            .map(|n| Record::from([("name", json!(format!("camera {n}"))), ("id", json!(n))]))
            .collect();
        let mut state = ListState::default();
        let pending = state.begin_fetch();
        state.apply_fetch_result(pending.ticket, Ok(ListPage::new(records, total_items)));
        GridViewModel::build(&columns, &state)
    }

    #[test]
    fn test_column_widths() {
        let layout = GridLayout::compute(&view(3, 3), size(80, 24));
        // "camera 0" is 8 wide, the header "Name" + glyph reserve is 6.
        assert_eq!(layout.columns[0], ColumnSpan { start: 0, width: 8 });
        // "Identifier" + glyph reserve.
        assert_eq!(layout.columns[1], ColumnSpan { start: 11, width: 12 });
        assert_eq!(layout.table_width(), 23);
    }

    #[test]
    fn test_hit_test_grid() {
        let layout = GridLayout::compute(&view(3, 3), size(80, 24));
        assert_eq!(layout.hit_test(pos(0, 0)), HitTarget::Header(0));
        assert_eq!(layout.hit_test(pos(12, 0)), HitTarget::Header(1));
        assert_eq!(layout.hit_test(pos(40, 0)), HitTarget::Outside);
        assert_eq!(layout.hit_test(pos(3, 1)), HitTarget::Outside);
        assert_eq!(layout.hit_test(pos(3, 2)), HitTarget::Cell { row: 0, col: 0 });
        assert_eq!(layout.hit_test(pos(15, 4)), HitTarget::Cell { row: 2, col: 1 });
        assert_eq!(layout.hit_test(pos(3, 5)), HitTarget::EmptyArea);
        assert_eq!(layout.hit_test(pos(60, 3)), HitTarget::EmptyArea);
        assert_eq!(layout.hit_test(pos(3, 23)), HitTarget::Outside);
        assert_eq!(layout.hit_test(pos(100, 3)), HitTarget::Outside);
    }

    #[test]
    fn test_rows_beyond_viewport_are_not_visible() {
        let layout = GridLayout::compute(&view(10, 10), size(80, 8));
        assert_eq!(layout.body_height, 4);
        assert_eq!(layout.visible_rows, 4);
        assert_eq!(layout.pagination_row, 6);
        assert_eq!(layout.hints_row, 7);
    }

    #[test]
    fn test_hit_test_pagination() {
        let layout = GridLayout::compute(&view(10, 95), size(80, 24));
        let row = layout.pagination_row;
        let find = |text: &str| {
            layout
                .pagination_items
                .iter()
                .find(|it| it.text == text)
                .unwrap()
                .clone()
        };

        // On page 1, first & prev are disabled.
        assert_eq!(layout.hit_test(pos(find("«").start, row)), HitTarget::Outside);
        assert_eq!(
            layout.hit_test(pos(find("3").start, row)),
            HitTarget::Pagination(PaginationHit::Page(3))
        );
        assert_eq!(
            layout.hit_test(pos(find("10").start + 1, row)),
            HitTarget::Pagination(PaginationHit::Page(10))
        );
        assert_eq!(
            layout.hit_test(pos(find("›").start, row)),
            HitTarget::Pagination(PaginationHit::Nav(NavButton::Next))
        );
        assert_eq!(layout.hit_test(pos(find("…").start, row)), HitTarget::Outside);
        assert_eq!(layout.hit_test(pos(find("-").start, row)), HitTarget::Outside);
        assert_eq!(
            layout.hit_test(pos(find("+").start, row)),
            HitTarget::Pagination(PaginationHit::LargerPageSize)
        );
        assert!(find("1").is_current);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("camera", 10), "camera");
        assert_eq!(truncate_to_width("camera", 4), "cam…");
        assert_eq!(truncate_to_width("카메라카메라", 5), "카메…");
        assert_eq!(fit_to_width("ab", 4), "ab  ");
    }
}
