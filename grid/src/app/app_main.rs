// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
                       MouseEvent, MouseEventKind};
use tokio::sync::mpsc;

use super::{AppSignal, GridMenuAction, GridMenuItems};
use crate::{ApplyOutcome, ClipboardService, ColumnDef, DEBUG_GRID_MOD, FetchTicket,
            GridIntent, GridInteraction, GridLayout, GridViewModel, ListFetcher, ListStore,
            MenuItemProvider, NavButton, OverlayManager, OverlayOutcome, PaginationIntent,
            Pos, Size, SortState, copy_to_clipboard_best_effort, pos, size, ui_str};

/// What the event loop has to do after an input event or a signal was handled. The
/// screen is always repainted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppEffect {
    /// The list parameters changed, so the current page has to be fetched again.
    Refetch,
    Exit,
    Nothing,
}

/// Holds the whole app: the list store, the columns, and the overlays on top of the
/// grid. Input events go in, [`AppEffect`]s come out. The view model and layout are
/// rebuilt after every change, so that they always match what is painted.
#[derive(Debug)]
pub struct AppMain<F: ListFetcher, C: ClipboardService> {
    store: ListStore<F>,
    columns: Vec<ColumnDef>,
    menu_items: GridMenuItems,
    interaction: GridInteraction,
    overlays: OverlayManager<GridMenuAction>,
    clipboard: C,
    viewport: Size,
    /// Where the last press landed. Popups opened from the context menu show up here.
    last_pointer: Pos,
    view: GridViewModel,
    layout: GridLayout,
}

mod constructor {
    use super::*;

    impl<F: ListFetcher, C: ClipboardService> AppMain<F, C> {
        pub fn new(
            store: ListStore<F>,
            columns: Vec<ColumnDef>,
            clipboard: C,
            viewport: Size,
        ) -> Self {
            DEBUG_GRID_MOD.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "🪄 construct grid::AppMain",
                    viewport = ?viewport,
                    column_count = %columns.len(),
                );
            });

            let view = GridViewModel::build(&columns, store.state());
            let layout = GridLayout::compute(&view, viewport);

            Self {
                store,
                columns,
                menu_items: GridMenuItems,
                interaction: GridInteraction::default(),
                overlays: OverlayManager::default(),
                clipboard,
                viewport,
                last_pointer: Pos::default(),
                view,
                layout,
            }
        }
    }
}

impl<F: ListFetcher, C: ClipboardService> AppMain<F, C> {
    #[must_use]
    pub fn store(&self) -> &ListStore<F> { &self.store }

    #[must_use]
    pub fn view(&self) -> &GridViewModel { &self.view }

    #[must_use]
    pub fn layout(&self) -> &GridLayout { &self.layout }

    #[must_use]
    pub fn overlays(&self) -> &OverlayManager<GridMenuAction> { &self.overlays }

    #[must_use]
    pub fn clipboard(&self) -> &C { &self.clipboard }

    #[must_use]
    pub fn viewport(&self) -> Size { self.viewport }

    /// Starts a fetch for the current list parameters. The grid shows the loading
    /// message until the result comes back as an [`AppSignal`].
    pub fn spawn_fetch(&mut self, sender: mpsc::Sender<AppSignal>) -> FetchTicket {
        let ticket = self.store.spawn_fetch(sender);
        self.refresh_view();
        ticket
    }

    pub fn on_signal(&mut self, signal: AppSignal) -> AppEffect {
        match signal {
            AppSignal::FetchCompleted(completed) => {
                let outcome = self.store.apply(completed);
                self.refresh_view();
                match outcome {
                    ApplyOutcome::AppliedPageClamped => AppEffect::Refetch,
                    ApplyOutcome::Applied | ApplyOutcome::DiscardedStale => {
                        AppEffect::Nothing
                    }
                }
            }
        }
    }

    pub fn on_event(&mut self, event: &Event, now: Instant) -> AppEffect {
        let effect = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key(*key),
            Event::Mouse(mouse) => self.on_mouse(*mouse, now),
            Event::Resize(cols, rows) => {
                self.viewport = size(*cols, *rows);
                AppEffect::Nothing
            }
            _ => AppEffect::Nothing,
        };

        self.refresh_view();

        DEBUG_GRID_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(message = "🎹 on_event", event = ?event, effect = ?effect);
        });

        effect
    }

    fn refresh_view(&mut self) {
        self.view = GridViewModel::build(&self.columns, self.store.state());
        self.layout = GridLayout::compute(&self.view, self.viewport);
    }

    fn on_key(&mut self, key: KeyEvent) -> AppEffect {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return AppEffect::Exit;
        }

        match self.overlays.on_key(key.code) {
            OverlayOutcome::MenuActivated(action) => return self.run_menu_action(action),
            OverlayOutcome::Handled => return AppEffect::Nothing,
            OverlayOutcome::NotHandled => {}
        }

        let model = self.store.state().pagination_model();
        let intent = match key.code {
            KeyCode::Char('q') => return AppEffect::Exit,
            KeyCode::Char('r') => return AppEffect::Refetch,
            KeyCode::Char('n') | KeyCode::Right | KeyCode::PageDown => {
                model.intent_for(NavButton::Next)
            }
            KeyCode::Char('p') | KeyCode::Left | KeyCode::PageUp => {
                model.intent_for(NavButton::Prev)
            }
            KeyCode::Char('g') | KeyCode::Home => model.intent_for(NavButton::First),
            KeyCode::Char('G') | KeyCode::End => model.intent_for(NavButton::Last),
            KeyCode::Char('+') => model.larger_page_size(),
            KeyCode::Char('-') => model.smaller_page_size(),
            _ => None,
        };

        intent.map_or(AppEffect::Nothing, |it| self.apply_pagination_intent(it))
    }

    fn on_mouse(&mut self, mouse: MouseEvent, now: Instant) -> AppEffect {
        let at = pos(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(button) => {
                self.last_pointer = at;
                match self.overlays.on_mouse_down(at, button) {
                    OverlayOutcome::MenuActivated(action) => self.run_menu_action(action),
                    OverlayOutcome::Handled => AppEffect::Nothing,
                    OverlayOutcome::NotHandled => {
                        let intent = self.interaction.on_mouse_down(
                            &self.view,
                            &self.layout,
                            button,
                            at,
                            now,
                        );
                        intent.map_or(AppEffect::Nothing, |it| self.apply_grid_intent(it))
                    }
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.overlays.on_mouse_drag(at, self.viewport);
                AppEffect::Nothing
            }
            MouseEventKind::Up(_) => {
                self.overlays.on_mouse_up();
                AppEffect::Nothing
            }
            _ => AppEffect::Nothing,
        }
    }

    fn apply_grid_intent(&mut self, intent: GridIntent) -> AppEffect {
        match intent {
            GridIntent::ToggleSort { field_id } => {
                self.store.state_mut().toggle_sort(&field_id);
                AppEffect::Refetch
            }
            GridIntent::Pagination(it) => self.apply_pagination_intent(it),
            GridIntent::RowContextMenu {
                row,
                record_index,
                at,
            } => {
                let items = self
                    .store
                    .state()
                    .records()
                    .get(record_index)
                    .map(|record| self.menu_items.row_menu_items(record, row, record_index))
                    .unwrap_or_default();
                self.overlays.open_context_menu(at, items, self.viewport);
                AppEffect::Nothing
            }
            GridIntent::EmptyAreaContextMenu { at } => {
                let items = self.menu_items.empty_area_menu_items(self.store.state());
                self.overlays.open_context_menu(at, items, self.viewport);
                AppEffect::Nothing
            }
            GridIntent::CellDoubleClick { row, col, at } => {
                self.open_cell_popup(row, col, at);
                AppEffect::Nothing
            }
        }
    }

    /// The popup shows the raw value of the field, not the formatted cell text.
    fn open_cell_popup(&mut self, row: usize, col: usize, at: Pos) {
        let (Some(body_row), Some(column)) = (self.view.rows.get(row), self.columns.get(col))
        else {
            return;
        };
        let value = self
            .store
            .state()
            .records()
            .get(body_row.record_index)
            .and_then(|record| record.display_value(&column.id));
        self.overlays.open_detail_popup_for_cell(
            &column.header,
            value.as_deref(),
            at,
            self.viewport,
            &mut self.clipboard,
        );
    }

    fn apply_pagination_intent(&mut self, intent: PaginationIntent) -> AppEffect {
        let state = self.store.state_mut();
        match intent {
            PaginationIntent::GoToPage(page) => {
                let before = state.current_page();
                if state.set_page(page) == before {
                    AppEffect::Nothing
                } else {
                    AppEffect::Refetch
                }
            }
            PaginationIntent::ChangePageSize(page_size) => {
                match state.set_page_size(page_size) {
                    Ok(()) => AppEffect::Refetch,
                    Err(error) => {
                        // % is Display, ? is Debug.
                        tracing::error!(
                            message = "Could not change the page size",
                            error = %error,
                        );
                        AppEffect::Nothing
                    }
                }
            }
        }
    }

    fn run_menu_action(&mut self, action: GridMenuAction) -> AppEffect {
        DEBUG_GRID_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(message = "🍔 Run menu action", action = ?action);
        });

        match action {
            GridMenuAction::ShowRecordDetails { row, record_index } => {
                if let Some(json) = self.record_as_json(record_index) {
                    self.overlays.open_detail_popup(
                        &ui_str::record_details_title(row + 1),
                        &json,
                        self.last_pointer,
                        self.viewport,
                        &mut self.clipboard,
                    );
                }
                AppEffect::Nothing
            }
            GridMenuAction::CopyRecordAsJson { record_index } => {
                if let Some(json) = self.record_as_json(record_index) {
                    copy_to_clipboard_best_effort(&mut self.clipboard, &json);
                }
                AppEffect::Nothing
            }
            GridMenuAction::Reload => AppEffect::Refetch,
            GridMenuAction::ClearSort => {
                self.store.state_mut().set_sort(SortState::none());
                AppEffect::Refetch
            }
        }
    }

    fn record_as_json(&self, record_index: usize) -> Option<String> {
        let record = self.store.state().records().get(record_index)?;
        match serde_json::to_string_pretty(record) {
            Ok(json) => Some(json),
            Err(error) => {
                // % is Display, ? is Debug.
                tracing::error!(
                    message = "Could not serialize record",
                    record_index = %record_index,
                    error = %error,
                );
                None
            }
        }
    }
}
