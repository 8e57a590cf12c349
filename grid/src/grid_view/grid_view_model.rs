// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::ColumnDef;
use crate::{ListState, PaginationModel, SortDirection, sorted_row_indices, ui_str};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridStatus {
    /// A fetch is in flight. The body shows [`ui_str::LOADING_MESSAGE`].
    Loading,
    /// The last fetch failed. The body only shows this message.
    Failed(String),
    Ready,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderCell {
    pub field_id: String,
    pub title: String,
    pub sort_direction: Option<SortDirection>,
    pub sortable: bool,
}

impl HeaderCell {
    /// The title, plus the sort glyph when this is the sorted column.
    #[must_use]
    pub fn label(&self) -> String {
        match self.sort_direction {
            Some(SortDirection::Ascending) => {
                format!("{} {}", self.title, ui_str::SORT_ASCENDING_GLYPH)
            }
            Some(SortDirection::Descending) => {
                format!("{} {}", self.title, ui_str::SORT_DESCENDING_GLYPH)
            }
            None => self.title.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BodyRow {
    /// Index into [`ListState::records`]. Display order can differ because of the
    /// client side sort.
    pub record_index: usize,
    /// One entry per column. `None` is an empty cell.
    pub cells: Vec<Option<String>>,
}

/// Everything the terminal painter needs to draw the grid. Built fresh from
/// [`ListState`] after every state change, never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridViewModel {
    pub status: GridStatus,
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<BodyRow>,
    pub pagination: PaginationModel,
}

impl GridViewModel {
    #[must_use]
    pub fn build(columns: &[ColumnDef], state: &ListState) -> Self {
        let status = match state.error() {
            Some(message) => GridStatus::Failed(message.to_string()),
            None if state.is_loading() => GridStatus::Loading,
            None => GridStatus::Ready,
        };

        let headers = columns
            .iter()
            .map(|column| HeaderCell {
                field_id: column.id.clone(),
                title: column.header.clone(),
                sort_direction: state.sort_state().direction_of(&column.id),
                sortable: column.sortable,
            })
            .collect();

        let rows = match status {
            GridStatus::Ready => sorted_row_indices(state.records(), state.sort_state())
                .into_iter()
                .map(|record_index| BodyRow {
                    record_index,
                    cells: columns
                        .iter()
                        .map(|column| column.format_cell(&state.records()[record_index]))
                        .collect(),
                })
                .collect(),
            GridStatus::Loading | GridStatus::Failed(_) => vec![],
        };

        Self {
            status,
            headers,
            rows,
            pagination: state.pagination_model(),
        }
    }

    /// What to show instead of rows, if anything. When ready w/ no rows, this is the
    /// "no data" placeholder spanning all columns.
    #[must_use]
    pub fn placeholder(&self) -> Option<&str> {
        match &self.status {
            GridStatus::Loading => Some(ui_str::LOADING_MESSAGE),
            GridStatus::Failed(message) => Some(message),
            GridStatus::Ready if self.rows.is_empty() => Some(ui_str::NO_DATA_MESSAGE),
            GridStatus::Ready => None,
        }
    }

    #[must_use]
    pub fn cell_text(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.cells.get(col)?.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::{ListPage, Record};

    fn columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("name", "Name"),
            ColumnDef::new("n", "Count"),
        ]
    }

    fn state_with(records: Vec<Record>) -> ListState {
        let mut state = ListState::default();
        let pending = state.begin_fetch();
        let total_items = records.len();
        state.apply_fetch_result(pending.ticket, Ok(ListPage::new(records, total_items)));
        state
    }

    #[test]
    fn test_empty_page_shows_placeholder() {
        let it = GridViewModel::build(&columns(), &state_with(vec![]));
        assert_eq!(it.status, GridStatus::Ready);
        assert!(it.rows.is_empty());
        assert_eq!(it.placeholder(), Some(ui_str::NO_DATA_MESSAGE));
        assert_eq!(it.headers.len(), 2);
    }

    #[test]
    fn test_loading_and_failed() {
        let mut state = ListState::default();
        let pending = state.begin_fetch();
        let it = GridViewModel::build(&columns(), &state);
        assert_eq!(it.status, GridStatus::Loading);
        assert_eq!(it.placeholder(), Some(ui_str::LOADING_MESSAGE));

        state.apply_fetch_result(pending.ticket, Err(miette::miette!("down")));
        let it = GridViewModel::build(&columns(), &state);
        assert_eq!(
            it.status,
            GridStatus::Failed(ui_str::FETCH_FAILED_MESSAGE.to_string())
        );
        assert_eq!(it.placeholder(), Some(ui_str::FETCH_FAILED_MESSAGE));
    }

    #[test]
    fn test_rows_follow_sort_and_header_shows_glyph() {
        let mut state = state_with(vec![
            Record::from([("name", json!("b")), ("n", json!(1))]),
            Record::from([("name", json!("a")), ("n", json!(null))]),
        ]);

        let it = GridViewModel::build(&columns(), &state);
        assert_eq!(it.headers[0].label(), "Name");
        assert_eq!(it.cell_text(0, 0), Some("b"));
        assert_eq!(it.cell_text(1, 1), None);

        state.toggle_sort("name");
        let it = GridViewModel::build(&columns(), &state);
        assert_eq!(it.headers[0].label(), "Name ▲");
        assert_eq!(it.headers[0].sort_direction, Some(SortDirection::Ascending));
        assert_eq!(it.rows[0].record_index, 1);
        assert_eq!(it.cell_text(0, 0), Some("a"));

        state.toggle_sort("name");
        let it = GridViewModel::build(&columns(), &state);
        assert_eq!(it.headers[0].label(), "Name ▼");
        assert_eq!(it.cell_text(0, 0), Some("b"));
        assert_eq!(it.placeholder(), None);
    }
}
