// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

use crate::{ListState, MenuItem, Record};

/// Supplies the items of the context menus. The grid knows where a right click landed,
/// the provider knows what can be done there.
pub trait MenuItemProvider {
    /// Handed back to the caller when an item is activated.
    type Action: Clone + Debug + PartialEq;

    /// Items for a right click on a row. `row` is the 0 based position on screen, after
    /// sorting. `record_index` points into [`ListState::records`].
    fn row_menu_items(
        &self,
        record: &Record,
        row: usize,
        record_index: usize,
    ) -> Vec<MenuItem<Self::Action>>;

    /// Items for a right click below the rows. No menu is shown if this is empty.
    fn empty_area_menu_items(&self, _state: &ListState) -> Vec<MenuItem<Self::Action>> {
        vec![]
    }
}
