// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The context menus the grid binary ships w/.

use crate::{ListState, MenuItem, MenuItemProvider, Record};

/// What the built in context menu items do. [`crate::AppMain`] runs these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridMenuAction {
    /// Opens a detail popup w/ every field of the record, as pretty printed JSON. The
    /// popup is titled after the row on screen.
    ShowRecordDetails { row: usize, record_index: usize },
    CopyRecordAsJson { record_index: usize },
    Reload,
    ClearSort,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridMenuItems;

impl MenuItemProvider for GridMenuItems {
    type Action = GridMenuAction;

    fn row_menu_items(
        &self,
        _record: &Record,
        row: usize,
        record_index: usize,
    ) -> Vec<MenuItem<Self::Action>> {
        vec![
            MenuItem::new(
                "Show details",
                GridMenuAction::ShowRecordDetails { row, record_index },
            ),
            MenuItem::new(
                "Copy row as JSON",
                GridMenuAction::CopyRecordAsJson { record_index },
            ),
        ]
    }

    fn empty_area_menu_items(&self, state: &ListState) -> Vec<MenuItem<Self::Action>> {
        vec![
            MenuItem::new("Reload", GridMenuAction::Reload),
            MenuItem::new("Clear sort", GridMenuAction::ClearSort)
                .disabled_if(state.sort_state().descriptor().is_none()),
        ]
    }
}
