// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{KeyCode, MouseButton};

use crate::{Pos, Rect, Size, display_width, size};

pub const MIN_MENU_WIDTH: u16 = 16;
/// Border and one space of padding, on each side.
const MENU_CHROME_WIDTH: u16 = 4;
const MENU_CHROME_HEIGHT: u16 = 2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem<A> {
    pub label: String,
    pub disabled: bool,
    pub action: A,
}

impl<A> MenuItem<A> {
    pub fn new(label: impl Into<String>, action: A) -> Self {
        Self {
            label: label.into(),
            disabled: false,
            action,
        }
    }

    #[must_use]
    pub fn disabled_if(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// What happened to the menu as a result of an input event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuOutcome<A> {
    /// An enabled item was picked. The menu is done, and the caller runs the action.
    Activated(A),
    /// Dismissed w/out picking anything.
    Closed,
    /// The event was for the menu, but it stays open (eg: a click on a disabled item).
    StillOpen,
}

impl<A> MenuOutcome<A> {
    #[must_use]
    pub fn closes_menu(&self) -> bool { !matches!(self, MenuOutcome::StillOpen) }
}

/// A list of actions, shown at the pointer position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContextMenu<A> {
    rect: Rect,
    items: Vec<MenuItem<A>>,
    selected: Option<usize>,
}

impl<A: Clone> ContextMenu<A> {
    /// Returns `None` if there are no items, since an empty menu is useless. The menu is
    /// moved up & left if it would spill out of `viewport`.
    #[must_use]
    pub fn open(at: Pos, items: Vec<MenuItem<A>>, viewport: Size) -> Option<Self> {
        if items.is_empty() {
            return None;
        }

        let widest_label = items
            .iter()
            .map(|item| display_width(&item.label))
            .max()
            .unwrap_or(0);
        let menu_size = size(
            widest_label
                .saturating_add(MENU_CHROME_WIDTH)
                .max(MIN_MENU_WIDTH),
            u16::try_from(items.len())
                .unwrap_or(u16::MAX)
                .saturating_add(MENU_CHROME_HEIGHT),
        );
        let selected = items.iter().position(|item| !item.disabled);

        Some(Self {
            rect: Rect::new(at, menu_size).clamp_into(viewport),
            items,
            selected,
        })
    }

    #[must_use]
    pub fn rect(&self) -> Rect { self.rect }

    #[must_use]
    pub fn items(&self) -> &[MenuItem<A>] { &self.items }

    /// The item that `Enter` activates.
    #[must_use]
    pub fn selected(&self) -> Option<usize> { self.selected }

    #[must_use]
    pub fn contains(&self, at: Pos) -> bool { self.rect.contains(at) }

    /// Index of the item drawn at `at`, if any.
    #[must_use]
    pub fn item_at(&self, at: Pos) -> Option<usize> {
        let Rect { origin, size } = self.rect;
        let inside_border = at.col > origin.col
            && at.col < origin.col.saturating_add(size.cols).saturating_sub(1)
            && at.row > origin.row;
        if !inside_border {
            return None;
        }
        let index = usize::from(at.row - origin.row - 1);
        (index < self.items.len()).then_some(index)
    }

    /// Disabled items can't be activated, and keep the menu open.
    #[must_use]
    pub fn activate(&self, index: usize) -> MenuOutcome<A> {
        match self.items.get(index) {
            Some(item) if !item.disabled => MenuOutcome::Activated(item.action.clone()),
            _ => MenuOutcome::StillOpen,
        }
    }

    /// A press outside the menu closes it.
    #[must_use]
    /// A press of any button outside the menu closes it. Inside, only the left button
    /// activates an item.
    pub fn on_mouse_down(&self, at: Pos, button: MouseButton) -> MenuOutcome<A> {
        if !self.contains(at) {
            return MenuOutcome::Closed;
        }
        if button != MouseButton::Left {
            return MenuOutcome::StillOpen;
        }
        self.item_at(at)
            .map_or(MenuOutcome::StillOpen, |index| self.activate(index))
    }

    pub fn on_key(&mut self, key: KeyCode) -> MenuOutcome<A> {
        match key {
            KeyCode::Esc => MenuOutcome::Closed,
            KeyCode::Enter => self
                .selected
                .map_or(MenuOutcome::StillOpen, |index| self.activate(index)),
            KeyCode::Up => {
                self.move_selection(false);
                MenuOutcome::StillOpen
            }
            KeyCode::Down => {
                self.move_selection(true);
                MenuOutcome::StillOpen
            }
            _ => MenuOutcome::StillOpen,
        }
    }

    /// Moves to the next (or previous) enabled item, wrapping around.
    fn move_selection(&mut self, forward: bool) {
        let count = self.items.len();
        let Some(current) = self.selected else {
            return;
        };
        self.selected = (1..=count)
            .map(|step| {
                if forward {
                    (current + step) % count
                } else {
                    (current + count - step % count) % count
                }
            })
            .find(|&index| !self.items[index].disabled);
    }
}
