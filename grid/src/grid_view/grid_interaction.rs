// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::{Duration, Instant};

use crossterm::event::MouseButton;

use super::{GridLayout, GridViewModel, HitTarget, PaginationHit};
use crate::{PaginationIntent, Pos};

/// Two left clicks on the same cell, at most this far apart, are a double click.
pub const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(400);

/// What a pointer press on the grid means. The caller decides what to do about it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridIntent {
    ToggleSort { field_id: String },
    RowContextMenu { row: usize, record_index: usize, at: Pos },
    CellDoubleClick { row: usize, col: usize, at: Pos },
    EmptyAreaContextMenu { at: Pos },
    Pagination(PaginationIntent),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DoubleClickDetector {
    threshold: Duration,
    last_click: Option<((usize, usize), Instant)>,
}

impl Default for DoubleClickDetector {
    fn default() -> Self { Self::new(DOUBLE_CLICK_THRESHOLD) }
}

impl DoubleClickDetector {
    #[must_use]
    pub fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            last_click: None,
        }
    }

    /// Returns `true` if this click completes a double click on `cell`. A third quick
    /// click starts over, rather than counting as another double click.
    pub fn register_click(&mut self, cell: (usize, usize), at: Instant) -> bool {
        let is_double_click = self.last_click.is_some_and(|(last_cell, last_at)| {
            last_cell == cell && at.saturating_duration_since(last_at) <= self.threshold
        });

        self.last_click = if is_double_click { None } else { Some((cell, at)) };
        is_double_click
    }

    pub fn reset(&mut self) { self.last_click = None; }
}

/// Turns pointer presses on the grid into [`GridIntent`]s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridInteraction {
    double_click_detector: DoubleClickDetector,
}

impl GridInteraction {
    pub fn on_mouse_down(
        &mut self,
        view: &GridViewModel,
        layout: &GridLayout,
        button: MouseButton,
        at: Pos,
        now: Instant,
    ) -> Option<GridIntent> {
        let target = layout.hit_test(at);

        match (button, target) {
            (MouseButton::Left, HitTarget::Cell { row, col }) => self
                .double_click_detector
                .register_click((row, col), now)
                .then_some(GridIntent::CellDoubleClick { row, col, at }),
            (MouseButton::Left, target) => {
                self.double_click_detector.reset();
                match target {
                    HitTarget::Header(col) => view
                        .headers
                        .get(col)
                        .filter(|header| header.sortable)
                        .map(|header| GridIntent::ToggleSort {
                            field_id: header.field_id.clone(),
                        }),
                    HitTarget::Pagination(hit) => {
                        pagination_intent(view, hit).map(GridIntent::Pagination)
                    }
                    _ => None,
                }
            }
            (MouseButton::Right, HitTarget::Cell { row, .. }) => {
                view.rows.get(row).map(|body_row| GridIntent::RowContextMenu {
                    row,
                    record_index: body_row.record_index,
                    at,
                })
            }
            (MouseButton::Right, HitTarget::EmptyArea) => {
                Some(GridIntent::EmptyAreaContextMenu { at })
            }
            _ => None,
        }
    }
}

fn pagination_intent(view: &GridViewModel, hit: PaginationHit) -> Option<PaginationIntent> {
    let model = &view.pagination;
    match hit {
        PaginationHit::Nav(button) => model.intent_for(button),
        PaginationHit::Page(page) => {
            (page != model.current_page).then_some(PaginationIntent::GoToPage(page))
        }
        PaginationHit::SmallerPageSize => model.smaller_page_size(),
        PaginationHit::LargerPageSize => model.larger_page_size(),
    }
}
