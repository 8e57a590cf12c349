// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! User facing strings. Everything the user reads in the terminal comes from here.

/// Shown in place of the grid when the latest fetch failed. The underlying error is
/// only written to the log.
pub const FETCH_FAILED_MESSAGE: &str = "An error occurred while loading the data.";

/// Shown in place of the grid while a fetch is in flight.
pub const LOADING_MESSAGE: &str = "Loading data...";

/// Single placeholder row when a page has no records.
pub const NO_DATA_MESSAGE: &str = "No data.";

/// Label of the button at the bottom of a detail popup.
pub const POPUP_OK_LABEL: &str = "OK";

/// Glyph in the top right corner of a detail popup.
pub const POPUP_CLOSE_GLYPH: &str = "✕";

pub const SORT_ASCENDING_GLYPH: &str = "▲";
pub const SORT_DESCENDING_GLYPH: &str = "▼";

pub const PAGE_FIRST_GLYPH: &str = "«";
pub const PAGE_PREV_GLYPH: &str = "‹";
pub const PAGE_NEXT_GLYPH: &str = "›";
pub const PAGE_LAST_GLYPH: &str = "»";
pub const PAGE_ELLIPSIS_GLYPH: &str = "…";

pub const KEY_HINTS: &str =
    "n/p: next/prev  g/G: first/last  +/-: page size  r: reload  q: quit";

/// Summary under the grid, eg: `Showing 11-20 of 95`.
#[must_use]
pub fn showing_range(first: usize, last: usize, total: usize) -> String {
    if total == 0 {
        "Showing 0 of 0".to_string()
    } else {
        format!("Showing {first}-{last} of {total}")
    }
}

/// Title of the popup opened by the "Show details" context menu item.
#[must_use]
pub fn record_details_title(row_number: usize) -> String { format!("Row {row_number}") }

#[must_use]
pub fn page_size_label(page_size: usize) -> String { format!("{page_size} / page") }

#[must_use]
pub fn goodbye_message() -> String {
    match std::env::var("USER") {
        Ok(username) => format!("Goodbye, {username} 👋. Thanks for using grid!"),
        Err(_) => "Thanks for using grid! 👋".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_showing_range() {
        assert_eq!(showing_range(11, 20, 95), "Showing 11-20 of 95");
        assert_eq!(showing_range(1, 0, 0), "Showing 0 of 0");
    }
}
