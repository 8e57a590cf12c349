// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A draggable popup that shows the full value of one cell.
//!
//! ```text
//! ┌ CCTV Name ───────────────────── ✕ ┐  ◄── header, drag it to move the popup
//! │ Gate 1 (north entrance), camera   │
//! │ facing the loading dock           │
//! │                            [ OK ] │
//! └───────────────────────────────────┘
//! ```

use std::{borrow::Cow,
          fmt::{Display, Formatter}};

use crossterm::event::MouseButton;

use crate::{ClipboardService, DEBUG_GRID_OVERLAY, Offset, Pos, Rect, Size,
            copy_to_clipboard_best_effort, display_width, pos, size, truncate_to_width,
            ui_str};

pub const POPUP_WIDTH: u16 = 38;
pub const MAX_POPUP_CONTENT_LINES: usize = 12;
/// Header row, OK button row, and the bottom border.
const POPUP_CHROME_HEIGHT: u16 = 3;
/// Border and one space of padding, on each side.
const POPUP_CHROME_WIDTH: u16 = 4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PopupId(pub u64);

impl Display for PopupId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "popup#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupOutcome {
    /// The press was outside this popup.
    NotMine,
    /// The close glyph or the OK button was pressed.
    Close,
    DragStarted,
    /// Inside the popup, but nothing to do.
    Consumed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailPopup {
    id: PopupId,
    title: String,
    content: String,
    lines: Vec<String>,
    rect: Rect,
    drag_offset: Option<Offset>,
    copied_to_clipboard: bool,
}

impl DetailPopup {
    /// Opens the popup at `at`, and copies `content` to the clipboard. If the copy
    /// fails, the popup opens anyway.
    pub fn open(
        id: PopupId,
        title: impl Into<String>,
        content: impl Into<String>,
        at: Pos,
        viewport: Size,
        clipboard: &mut dyn ClipboardService,
    ) -> Self {
        let title = title.into();
        let content = content.into();
        let lines = wrap_to_width(
            &content,
            POPUP_WIDTH - POPUP_CHROME_WIDTH,
            MAX_POPUP_CONTENT_LINES,
        );
        let height = u16::try_from(lines.len())
            .unwrap_or(u16::MAX)
            .saturating_add(POPUP_CHROME_HEIGHT);
        let copied_to_clipboard = copy_to_clipboard_best_effort(clipboard, &content);

        DEBUG_GRID_OVERLAY.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "🪟 Opened detail popup",
                id = %id,
                title = %title,
                at = %at,
                copied_to_clipboard = %copied_to_clipboard,
            );
        });

        Self {
            id,
            title,
            content,
            lines,
            rect: Rect::new(at, size(POPUP_WIDTH, height)).clamp_into(viewport),
            drag_offset: None,
            copied_to_clipboard,
        }
    }

    #[must_use]
    pub fn id(&self) -> PopupId { self.id }

    #[must_use]
    pub fn title(&self) -> &str { &self.title }

    #[must_use]
    pub fn content(&self) -> &str { &self.content }

    /// The content, wrapped to fit the popup.
    #[must_use]
    pub fn lines(&self) -> &[String] { &self.lines }

    #[must_use]
    pub fn rect(&self) -> Rect { self.rect }

    #[must_use]
    pub fn is_dragging(&self) -> bool { self.drag_offset.is_some() }

    #[must_use]
    pub fn was_copied_to_clipboard(&self) -> bool { self.copied_to_clipboard }

    #[must_use]
    pub fn contains(&self, at: Pos) -> bool { self.rect.contains(at) }

    /// Where the close glyph is drawn, on the header row.
    #[must_use]
    pub fn close_glyph_pos(&self) -> Pos {
        let Rect { origin, size } = self.rect;
        pos(origin.col + size.cols - 3, origin.row)
    }

    /// Where `[ OK ]` is drawn, right aligned on the last row inside the border.
    #[must_use]
    pub fn ok_button_rect(&self) -> Rect {
        let Rect { origin, size } = self.rect;
        let label = ok_button_label();
        let width = display_width(&label);
        Rect::new(
            pos(origin.col + size.cols - 2 - width, origin.row + size.rows - 2),
            crate::size(width, 1),
        )
    }

    /// Only the left button closes or drags. Any other press inside is swallowed.
    pub fn on_mouse_down(&mut self, at: Pos, button: MouseButton) -> PopupOutcome {
        if !self.contains(at) {
            return PopupOutcome::NotMine;
        }
        if button != MouseButton::Left {
            return PopupOutcome::Consumed;
        }

        if at == self.close_glyph_pos() || self.ok_button_rect().contains(at) {
            return PopupOutcome::Close;
        }

        if at.row == self.rect.origin.row {
            self.drag_offset = Some(at.offset_from(self.rect.origin));
            return PopupOutcome::DragStarted;
        }

        PopupOutcome::Consumed
    }

    /// Follows the pointer while dragging. Returns whether the popup moved.
    pub fn on_mouse_drag(&mut self, at: Pos, viewport: Size) -> bool {
        let Some(offset) = self.drag_offset else {
            return false;
        };
        let before = self.rect;
        self.rect = Rect::new(at.minus(offset), self.rect.size).clamp_into(viewport);
        before != self.rect
    }

    pub fn on_mouse_up(&mut self) { self.drag_offset = None; }
}

#[must_use]
pub fn ok_button_label() -> String { format!("[ {} ]", ui_str::POPUP_OK_LABEL) }

/// Wraps `text` at word boundaries so that no line is wider than `max_width`. Words
/// that are too long are broken, and existing line breaks are kept. If there are more
/// than `max_lines` lines, the last one ends w/ `…`.
#[must_use]
pub fn wrap_to_width(text: &str, max_width: u16, max_lines: usize) -> Vec<String> {
    let options = textwrap::Options::new(usize::from(max_width.max(1))).break_words(true);
    let mut acc: Vec<String> = textwrap::wrap(text, options)
        .into_iter()
        .map(Cow::into_owned)
        .collect();

    if acc.is_empty() {
        acc.push(String::new());
    }

    if acc.len() > max_lines {
        acc.truncate(max_lines);
        if let Some(last) = acc.last_mut() {
            let marked = format!("{last}{}", ui_str::PAGE_ELLIPSIS_GLYPH);
            *last = truncate_to_width(&marked, max_width);
        }
    }

    acc
}
