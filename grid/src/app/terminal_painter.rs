// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Draws a frame: the grid first, then the detail popups from the bottom up, and the
//! context menu on top of everything. Every frame is painted from scratch. Commands are
//! queued and flushed once at the end.

use std::io::{Result, Write};

use crossterm::{cursor::MoveTo,
                queue,
                style::{Attribute, Color, Print, ResetColor, SetAttribute,
                        SetForegroundColor},
                terminal::{Clear, ClearType}};

use super::AppMain;
use crate::{COLUMN_SEPARATOR, COLUMN_SEPARATOR_CROSS, ClipboardService, ContextMenu,
            DetailPopup, FIRST_BODY_ROW, GridLayout, GridStatus, GridViewModel, HEADER_ROW,
            ListFetcher, OverlayManager, Pos, Rect, SEPARATOR_ROW, Size, display_width,
            fit_to_width, ok_button_label, pos, truncate_to_width, ui_str};

#[derive(Debug)]
pub struct TerminalPainter<W: Write> {
    pub write: W,
}

impl<W: Write> TerminalPainter<W> {
    pub fn new(write: W) -> Self { Self { write } }

    pub fn paint_app<F: ListFetcher, C: ClipboardService>(
        &mut self,
        app: &AppMain<F, C>,
    ) -> Result<()> {
        self.paint(app.view(), app.layout(), app.overlays())
    }

    pub fn paint<A: Clone>(
        &mut self,
        view: &GridViewModel,
        layout: &GridLayout,
        overlays: &OverlayManager<A>,
    ) -> Result<()> {
        queue!(self.write, ResetColor, Clear(ClearType::All))?;

        self.paint_header(view, layout)?;
        self.paint_body(view, layout)?;
        self.paint_pagination(layout)?;

        for popup in overlays.popups() {
            self.paint_popup(popup, layout.viewport)?;
        }
        if let Some(menu) = overlays.context_menu() {
            self.paint_context_menu(menu, layout.viewport)?;
        }

        self.write.flush()
    }

    fn paint_header(&mut self, view: &GridViewModel, layout: &GridLayout) -> Result<()> {
        let viewport = layout.viewport;

        let header_line = view
            .headers
            .iter()
            .zip(&layout.columns)
            .map(|(header, span)| fit_to_width(&header.label(), span.width))
            .collect::<Vec<_>>()
            .join(COLUMN_SEPARATOR);
        queue!(self.write, SetAttribute(Attribute::Bold))?;
        self.print_at(pos(0, HEADER_ROW), &header_line, viewport)?;
        queue!(self.write, SetAttribute(Attribute::Reset))?;

        let separator_line = layout
            .columns
            .iter()
            .map(|span| "─".repeat(usize::from(span.width)))
            .collect::<Vec<_>>()
            .join(COLUMN_SEPARATOR_CROSS);
        self.print_at(pos(0, SEPARATOR_ROW), &separator_line, viewport)
    }

    fn paint_body(&mut self, view: &GridViewModel, layout: &GridLayout) -> Result<()> {
        if layout.body_height == 0 {
            return Ok(());
        }

        if let Some(message) = view.placeholder() {
            let color = match view.status {
                GridStatus::Failed(_) => Color::Red,
                GridStatus::Loading | GridStatus::Ready => Color::DarkGrey,
            };
            queue!(self.write, SetForegroundColor(color))?;
            self.print_at(pos(0, FIRST_BODY_ROW), message, layout.viewport)?;
            return queue!(self.write, ResetColor);
        }

        for (index, row) in view.rows.iter().take(layout.visible_rows).enumerate() {
            let line = row
                .cells
                .iter()
                .zip(&layout.columns)
                .map(|(cell, span)| fit_to_width(cell.as_deref().unwrap_or(""), span.width))
                .collect::<Vec<_>>()
                .join(COLUMN_SEPARATOR);
            self.print_at(pos(0, layout.body_row_to_screen(index)), &line, layout.viewport)?;
        }

        Ok(())
    }

    fn paint_pagination(&mut self, layout: &GridLayout) -> Result<()> {
        for item in &layout.pagination_items {
            let attribute = if item.is_current {
                Attribute::Reverse
            } else if item.hit.is_some() && !item.is_enabled {
                Attribute::Dim
            } else {
                Attribute::NoReverse
            };
            queue!(self.write, SetAttribute(attribute))?;
            self.print_at(pos(item.start, layout.pagination_row), &item.text, layout.viewport)?;
            queue!(self.write, SetAttribute(Attribute::Reset))?;
        }

        queue!(self.write, SetForegroundColor(Color::DarkGrey))?;
        self.print_at(pos(0, layout.hints_row), ui_str::KEY_HINTS, layout.viewport)?;
        queue!(self.write, ResetColor)
    }

    fn paint_popup(&mut self, popup: &DetailPopup, viewport: Size) -> Result<()> {
        let Rect { origin, size } = popup.rect();
        let inner_width = size.cols.saturating_sub(4);

        // ┌ title ───── ✕ ┐
        let title = truncate_to_width(popup.title(), size.cols.saturating_sub(8));
        let fill = size.cols.saturating_sub(7 + display_width(&title));
        let top = format!(
            "┌ {title} {} {} ┐",
            "─".repeat(usize::from(fill)),
            ui_str::POPUP_CLOSE_GLYPH
        );
        self.print_at(origin, &top, viewport)?;

        let mut row = origin.row + 1;
        for line in popup.lines() {
            let text = format!("│ {} │", fit_to_width(line, inner_width));
            self.print_at(pos(origin.col, row), &text, viewport)?;
            row += 1;
        }

        let label = ok_button_label();
        let ok_row = format!(
            "│ {}{label} │",
            " ".repeat(usize::from(inner_width.saturating_sub(display_width(&label))))
        );
        self.print_at(pos(origin.col, row), &ok_row, viewport)?;
        queue!(self.write, SetAttribute(Attribute::Reverse))?;
        self.print_at(popup.ok_button_rect().origin, &label, viewport)?;
        queue!(self.write, SetAttribute(Attribute::Reset))?;

        let bottom = format!("└{}┘", "─".repeat(usize::from(size.cols.saturating_sub(2))));
        self.print_at(pos(origin.col, row + 1), &bottom, viewport)
    }

    fn paint_context_menu<A>(&mut self, menu: &ContextMenu<A>, viewport: Size) -> Result<()>
    where
        A: Clone,
    {
        let Rect { origin, size } = menu.rect();
        let border = "─".repeat(usize::from(size.cols.saturating_sub(2)));
        let inner_width = size.cols.saturating_sub(4);

        self.print_at(origin, &format!("┌{border}┐"), viewport)?;

        let mut row = origin.row + 1;
        for (index, item) in menu.items().iter().enumerate() {
            let attribute = if menu.selected() == Some(index) {
                Attribute::Reverse
            } else if item.disabled {
                Attribute::Dim
            } else {
                Attribute::NoReverse
            };
            self.print_at(pos(origin.col, row), "│", viewport)?;
            queue!(self.write, SetAttribute(attribute))?;
            let text = format!(" {} ", fit_to_width(&item.label, inner_width));
            self.print_at(pos(origin.col + 1, row), &text, viewport)?;
            queue!(self.write, SetAttribute(Attribute::Reset))?;
            self.print_at(pos(origin.col + size.cols.saturating_sub(1), row), "│", viewport)?;
            row += 1;
        }

        self.print_at(pos(origin.col, row), &format!("└{border}┘"), viewport)
    }

    /// Anything past the right edge of the terminal is cut off, and rows below the
    /// bottom edge are skipped.
    fn print_at(&mut self, at: Pos, text: &str, viewport: Size) -> Result<()> {
        if at.col >= viewport.cols || at.row >= viewport.rows {
            return Ok(());
        }
        let text = truncate_to_width(text, viewport.cols - at.col);
        queue!(self.write, MoveTo(at.col, at.row), Print(text))
    }
}
