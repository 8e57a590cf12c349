// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Terminal coordinates. The origin is the top left corner of the terminal, and both
//! axes grow towards the bottom right. These are the same units that crossterm reports
//! in mouse events.

use std::fmt::{Display, Formatter, Result};

/// A position in the terminal, in character cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pos {
    pub col: u16,
    pub row: u16,
}

#[must_use]
pub fn pos(col: u16, row: u16) -> Pos { Pos { col, row } }

/// Width and height, in character cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub cols: u16,
    pub rows: u16,
}

#[must_use]
pub fn size(cols: u16, rows: u16) -> Size { Size { cols, rows } }

/// Distance from an origin to a pointer, used while dragging.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Offset {
    pub col: u16,
    pub row: u16,
}

impl Pos {
    /// `self - other`, clamped at zero on each axis.
    #[must_use]
    pub fn offset_from(self, origin: Pos) -> Offset {
        Offset {
            col: self.col.saturating_sub(origin.col),
            row: self.row.saturating_sub(origin.row),
        }
    }

    /// `self - offset`, clamped at zero on each axis.
    #[must_use]
    pub fn minus(self, offset: Offset) -> Pos {
        pos(
            self.col.saturating_sub(offset.col),
            self.row.saturating_sub(offset.row),
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub origin: Pos,
    pub size: Size,
}

impl Rect {
    #[must_use]
    pub fn new(origin: Pos, size: Size) -> Self { Self { origin, size } }

    /// Half open on both axes, so a zero sized rect contains nothing.
    #[must_use]
    pub fn contains(&self, it: Pos) -> bool {
        let Rect { origin, size } = self;
        it.col >= origin.col
            && it.row >= origin.row
            && u32::from(it.col) < u32::from(origin.col) + u32::from(size.cols)
            && u32::from(it.row) < u32::from(origin.row) + u32::from(size.rows)
    }

    /// Moves the rect so that it fits inside `bounds`, as long as it is smaller than
    /// `bounds`. Overlays spawned near the bottom right edge use this.
    #[must_use]
    pub fn clamp_into(self, bounds: Size) -> Self {
        let max_col = bounds.cols.saturating_sub(self.size.cols);
        let max_row = bounds.rows.saturating_sub(self.size.rows);
        Rect {
            origin: pos(self.origin.col.min(max_col), self.origin.row.min(max_row)),
            size: self.size,
        }
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "[col: {}, row: {}]", self.col, self.row)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(pos(2, 3), size(4, 2));
        assert!(rect.contains(pos(2, 3)));
        assert!(rect.contains(pos(5, 4)));
        assert!(!rect.contains(pos(6, 4)));
        assert!(!rect.contains(pos(5, 5)));
        assert!(!rect.contains(pos(1, 3)));
        assert!(!Rect::new(pos(0, 0), size(0, 0)).contains(pos(0, 0)));
    }

    #[test]
    fn test_offset_round_trip() {
        let origin = pos(10, 5);
        let pointer = pos(14, 5);
        let offset = pointer.offset_from(origin);
        assert_eq!(offset, Offset { col: 4, row: 0 });
        assert_eq!(pos(20, 8).minus(offset), pos(16, 8));
        assert_eq!(pos(1, 0).minus(offset), pos(0, 0));
    }

    #[test]
    fn test_clamp_into() {
        let rect = Rect::new(pos(78, 22), size(10, 4));
        assert_eq!(rect.clamp_into(size(80, 24)).origin, pos(70, 20));
        let rect = Rect::new(pos(3, 3), size(10, 4));
        assert_eq!(rect.clamp_into(size(80, 24)).origin, pos(3, 3));
    }
}
