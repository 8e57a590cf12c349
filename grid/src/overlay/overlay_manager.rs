// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{KeyCode, MouseButton};

use super::{ContextMenu, DetailPopup, MenuItem, MenuOutcome, PopupId, PopupOutcome};
use crate::{ClipboardService, DEBUG_GRID_OVERLAY, Pos, Size};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OverlayOutcome<A> {
    /// No overlay wanted the event, so it goes to the grid.
    NotHandled,
    Handled,
    MenuActivated(A),
}

/// Owns every overlay on screen: at most one context menu, and any number of detail
/// popups. Popups are kept in z-order, the last one is on top.
///
/// Input is offered to the context menu first, then to the popups from the top down.
/// A press outside the context menu closes it, and then carries on to whatever is
/// under the pointer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayManager<A> {
    context_menu: Option<ContextMenu<A>>,
    popups: Vec<DetailPopup>,
    next_popup_id: u64,
}

impl<A> Default for OverlayManager<A> {
    fn default() -> Self {
        Self {
            context_menu: None,
            popups: vec![],
            next_popup_id: 1,
        }
    }
}

impl<A: Clone> OverlayManager<A> {
    #[must_use]
    pub fn context_menu(&self) -> Option<&ContextMenu<A>> { self.context_menu.as_ref() }

    /// Bottom to top.
    #[must_use]
    pub fn popups(&self) -> &[DetailPopup] { &self.popups }

    /// Opens a menu at `at`, replacing any menu that is already open. Nothing opens
    /// when there are no items. Returns whether a menu is now open.
    pub fn open_context_menu(
        &mut self,
        at: Pos,
        items: Vec<MenuItem<A>>,
        viewport: Size,
    ) -> bool {
        self.context_menu = ContextMenu::open(at, items, viewport);
        self.context_menu.is_some()
    }

    pub fn close_context_menu(&mut self) { self.context_menu = None; }

    pub fn open_detail_popup(
        &mut self,
        title: &str,
        content: &str,
        at: Pos,
        viewport: Size,
        clipboard: &mut dyn ClipboardService,
    ) -> PopupId {
        let id = PopupId(self.next_popup_id);
        self.next_popup_id += 1;
        self.popups
            .push(DetailPopup::open(id, title, content, at, viewport, clipboard));
        id
    }

    /// A double click on a cell. Empty cells (`None`, or `""`) open nothing. Otherwise
    /// exactly one popup opens, titled w/ the column header.
    pub fn open_detail_popup_for_cell(
        &mut self,
        header: &str,
        value: Option<&str>,
        at: Pos,
        viewport: Size,
        clipboard: &mut dyn ClipboardService,
    ) -> Option<PopupId> {
        let Some(value) = value.filter(|it| !it.is_empty()) else {
            DEBUG_GRID_OVERLAY.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(message = "🪟 Empty cell, no popup", header = %header);
            });
            return None;
        };
        Some(self.open_detail_popup(header, value, at, viewport, clipboard))
    }

    /// Returns whether a popup w/ this id was open.
    pub fn close_popup(&mut self, id: PopupId) -> bool {
        let count_before = self.popups.len();
        self.popups.retain(|popup| popup.id() != id);
        count_before != self.popups.len()
    }

    fn bring_to_front(&mut self, index: usize) {
        let popup = self.popups.remove(index);
        self.popups.push(popup);
    }

    pub fn on_mouse_down(&mut self, at: Pos, button: MouseButton) -> OverlayOutcome<A> {
        if let Some(menu) = &self.context_menu {
            match menu.on_mouse_down(at, button) {
                MenuOutcome::Activated(action) => {
                    self.close_context_menu();
                    return OverlayOutcome::MenuActivated(action);
                }
                MenuOutcome::StillOpen => return OverlayOutcome::Handled,
                MenuOutcome::Closed => self.close_context_menu(),
            }
        }

        for index in (0..self.popups.len()).rev() {
            match self.popups[index].on_mouse_down(at, button) {
                PopupOutcome::NotMine => continue,
                PopupOutcome::Close => {
                    self.popups.remove(index);
                }
                PopupOutcome::DragStarted | PopupOutcome::Consumed => {
                    self.bring_to_front(index);
                }
            }
            return OverlayOutcome::Handled;
        }

        OverlayOutcome::NotHandled
    }

    /// Returns whether a popup is being dragged (and so the event was handled).
    pub fn on_mouse_drag(&mut self, at: Pos, viewport: Size) -> bool {
        let mut is_dragging = false;
        for popup in self.popups.iter_mut().filter(|it| it.is_dragging()) {
            popup.on_mouse_drag(at, viewport);
            is_dragging = true;
        }
        is_dragging
    }

    pub fn on_mouse_up(&mut self) { self.popups.iter_mut().for_each(DetailPopup::on_mouse_up); }

    /// Only the context menu takes keys. Popups close via their own buttons.
    pub fn on_key(&mut self, key: KeyCode) -> OverlayOutcome<A> {
        let Some(menu) = &mut self.context_menu else {
            return OverlayOutcome::NotHandled;
        };
        match menu.on_key(key) {
            MenuOutcome::Activated(action) => {
                self.close_context_menu();
                OverlayOutcome::MenuActivated(action)
            }
            MenuOutcome::Closed => {
                self.close_context_menu();
                OverlayOutcome::Handled
            }
            MenuOutcome::StillOpen => OverlayOutcome::Handled,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{clipboard_test_fixtures::TestClipboard, pos, size};

    const VIEWPORT: Size = Size { cols: 80, rows: 24 };

    fn items() -> Vec<MenuItem<&'static str>> {
        vec![
            MenuItem::new("View details", "view"),
            MenuItem::new("Reload", "reload"),
        ]
    }

    #[test]
    fn test_empty_cell_spawns_no_popup() {
        let mut it = OverlayManager::<()>::default();
        let mut clipboard = TestClipboard::default();

        let id = it.open_detail_popup_for_cell("Name", None, pos(1, 1), VIEWPORT, &mut clipboard);
        assert_eq!(id, None);
        let id =
            it.open_detail_popup_for_cell("Name", Some(""), pos(1, 1), VIEWPORT, &mut clipboard);
        assert_eq!(id, None);
        assert!(it.popups().is_empty());
        assert_eq!(clipboard.content, "");
    }

    #[test]
    fn test_non_empty_cell_spawns_one_popup() {
        let mut it = OverlayManager::<()>::default();
        let mut clipboard = TestClipboard::default();

        let id = it
            .open_detail_popup_for_cell("Count", Some("0"), pos(1, 1), VIEWPORT, &mut clipboard)
            .unwrap();
        assert_eq!(it.popups().len(), 1);
        assert_eq!(it.popups()[0].id(), id);
        assert_eq!(it.popups()[0].title(), "Count");
        assert_eq!(it.popups()[0].content(), "0");
        assert_eq!(clipboard.content, "0");
    }

    #[test]
    fn test_popup_ids_are_unique() {
        let mut it = OverlayManager::<()>::default();
        let mut clipboard = TestClipboard::default();
        let first = it.open_detail_popup("a", "1", pos(0, 0), VIEWPORT, &mut clipboard);
        let second = it.open_detail_popup("b", "2", pos(0, 0), VIEWPORT, &mut clipboard);
        assert_ne!(first, second);

        assert!(it.close_popup(first));
        assert!(!it.close_popup(first));
        assert_eq!(it.popups().len(), 1);
    }

    #[test]
    fn test_outside_click_closes_menu_and_falls_through() {
        let mut it = OverlayManager::default();
        assert!(it.open_context_menu(pos(10, 10), items(), VIEWPORT));
        assert_eq!(it.on_mouse_down(pos(0, 0), MouseButton::Left), OverlayOutcome::NotHandled);
        assert!(it.context_menu().is_none());
    }

    #[test]
    fn test_menu_activation_and_escape() {
        let mut it = OverlayManager::default();
        it.open_context_menu(pos(10, 10), items(), VIEWPORT);
        assert_eq!(
            it.on_mouse_down(pos(11, 12), MouseButton::Left),
            OverlayOutcome::MenuActivated("reload")
        );
        assert!(it.context_menu().is_none());

        it.open_context_menu(pos(10, 10), items(), VIEWPORT);
        assert_eq!(it.on_key(KeyCode::Esc), OverlayOutcome::Handled);
        assert!(it.context_menu().is_none());
        assert_eq!(it.on_key(KeyCode::Esc), OverlayOutcome::NotHandled);

        assert!(!it.open_context_menu(pos(10, 10), vec![], VIEWPORT));
    }

    #[test]
    fn test_right_click_inside_overlays_is_swallowed() {
        let mut it = OverlayManager::<&str>::default();
        let mut clipboard = TestClipboard::default();
        it.open_detail_popup("a", "1", pos(40, 0), VIEWPORT, &mut clipboard);
        let close_glyph = it.popups()[0].close_glyph_pos();

        assert_eq!(it.on_mouse_down(close_glyph, MouseButton::Right), OverlayOutcome::Handled);
        assert_eq!(it.popups().len(), 1);
        assert_eq!(it.on_mouse_down(pos(41, 0), MouseButton::Right), OverlayOutcome::Handled);
        assert!(!it.on_mouse_drag(pos(45, 5), VIEWPORT));

        it.open_context_menu(pos(10, 10), items(), VIEWPORT);
        assert_eq!(it.on_mouse_down(pos(11, 12), MouseButton::Right), OverlayOutcome::Handled);
        assert!(it.context_menu().is_some());
        assert_eq!(
            it.on_mouse_down(pos(11, 12), MouseButton::Left),
            OverlayOutcome::MenuActivated("reload")
        );
    }

    #[test]
    fn test_topmost_popup_gets_the_click() {
        let mut it = OverlayManager::<()>::default();
        let mut clipboard = TestClipboard::default();
        let bottom = it.open_detail_popup("a", "1", pos(0, 0), VIEWPORT, &mut clipboard);
        let top = it.open_detail_popup("b", "2", pos(2, 0), VIEWPORT, &mut clipboard);

        // Both popups cover this position. The top one closes.
        let close_glyph = it.popups()[1].close_glyph_pos();
        assert_eq!(it.on_mouse_down(close_glyph, MouseButton::Left), OverlayOutcome::Handled);
        assert_eq!(it.popups().len(), 1);
        assert_eq!(it.popups()[0].id(), bottom);
        assert_ne!(bottom, top);
    }

    #[test]
    fn test_click_raises_popup_and_drag_moves_it() {
        let mut it = OverlayManager::<()>::default();
        let mut clipboard = TestClipboard::default();
        let bottom = it.open_detail_popup("a", "1", pos(0, 0), VIEWPORT, &mut clipboard);
        it.open_detail_popup("b", "2", pos(40, 10), VIEWPORT, &mut clipboard);

        assert_eq!(it.on_mouse_down(pos(1, 0), MouseButton::Left), OverlayOutcome::Handled);
        assert_eq!(it.popups()[1].id(), bottom);

        assert!(it.on_mouse_drag(pos(6, 5), VIEWPORT));
        assert_eq!(it.popups()[1].rect().origin, pos(5, 5));

        it.on_mouse_up();
        assert!(!it.on_mouse_drag(pos(9, 9), VIEWPORT));
        assert_eq!(it.on_mouse_down(pos(0, 23), MouseButton::Left), OverlayOutcome::NotHandled);
    }
}
