// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use smallvec::SmallVec;

use crate::ui_str;

/// Show every page number when there are at most this many pages.
pub const MAX_PAGES_WITHOUT_ELLIPSIS: usize = 7;

/// How many page numbers are shown at the start (or the end) when the current page is
/// near that edge.
pub const EDGE_WINDOW_SIZE: usize = 5;

/// The most tokens [`page_tokens`] ever returns: first, ellipsis, three in the middle,
/// ellipsis, last. The front/back branch returns at most 7 as well.
pub const MAX_PAGE_TOKENS: usize = MAX_PAGES_WITHOUT_ELLIPSIS;

pub type PageTokens = SmallVec<[PageToken; MAX_PAGE_TOKENS]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageToken {
    Page(usize),
    /// Two or more page numbers collapsed into one marker.
    Ellipsis,
}

/// Computes the bounded sequence of page numbers shown by the pagination control.
///
/// - At most [`MAX_PAGES_WITHOUT_ELLIPSIS`] pages: all of them. No pages at all shows
///   a lone `1`.
/// - Otherwise the first and last page are always shown, plus a window around
///   `current_page`. Each gap collapses into a single [`PageToken::Ellipsis`]:
///   - front: `1 2 3 4 5 … 10` (current page is 1..=4).
///   - back: `1 … 6 7 8 9 10` (current page is within 3 of the last page).
///   - middle: `1 … 4 5 6 … 10`.
///
/// `current_page` is clamped into range first.
#[must_use]
pub fn page_tokens(current_page: usize, total_pages: usize) -> PageTokens {
    use PageToken::{Ellipsis, Page};

    let total_pages = total_pages.max(1);
    let current_page = current_page.clamp(1, total_pages);

    if total_pages <= MAX_PAGES_WITHOUT_ELLIPSIS {
        return (1..=total_pages).map(Page).collect();
    }

    let mut acc = PageTokens::new();
    let front_edge = EDGE_WINDOW_SIZE - 1;
    let back_edge = total_pages - (EDGE_WINDOW_SIZE - 2);

    if current_page <= front_edge {
        acc.extend((1..=EDGE_WINDOW_SIZE).map(Page));
        acc.push(Ellipsis);
        acc.push(Page(total_pages));
    } else if current_page >= back_edge {
        acc.push(Page(1));
        acc.push(Ellipsis);
        acc.extend((total_pages - (EDGE_WINDOW_SIZE - 1)..=total_pages).map(Page));
    } else {
        acc.push(Page(1));
        acc.push(Ellipsis);
        acc.extend((current_page - 1..=current_page + 1).map(Page));
        acc.push(Ellipsis);
        acc.push(Page(total_pages));
    }

    acc
}

impl Display for PageToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            PageToken::Page(page) => write!(f, "{page}"),
            PageToken::Ellipsis => write!(f, "{}", ui_str::PAGE_ELLIPSIS_GLYPH),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{PageToken::{Ellipsis, Page},
                *};

    fn tokens(current_page: usize, total_pages: usize) -> Vec<PageToken> {
        page_tokens(current_page, total_pages).into_vec()
    }

    #[test]
    fn test_front_branch() {
        assert_eq!(
            tokens(1, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
        assert_eq!(tokens(4, 10), tokens(1, 10));
    }

    #[test]
    fn test_back_branch() {
        assert_eq!(
            tokens(10, 10),
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(tokens(7, 10), tokens(10, 10));
    }

    #[test]
    fn test_middle_branch() {
        assert_eq!(
            tokens(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        assert_eq!(
            tokens(6, 10),
            vec![Page(1), Ellipsis, Page(5), Page(6), Page(7), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_few_pages_shows_all() {
        assert_eq!(tokens(1, 0), vec![Page(1)]);
        assert_eq!(tokens(1, 1), vec![Page(1)]);
        assert_eq!(tokens(3, 7), (1..=7).map(Page).collect::<Vec<_>>());
    }

    #[test]
    fn test_out_of_range_current_page_is_clamped() {
        assert_eq!(tokens(0, 10), tokens(1, 10));
        assert_eq!(tokens(99, 10), tokens(10, 10));
    }

    /// Every output has the first & last page, the current page, strictly increasing
    /// page numbers, and each ellipsis hides at least two pages.
    #[test]
    fn test_shape_for_many_inputs() {
        for total_pages in 1..=40 {
            for current_page in 1..=total_pages {
                let it = tokens(current_page, total_pages);
                assert!(it.len() <= MAX_PAGE_TOKENS);
                assert_eq!(it.first(), Some(&Page(1)));
                assert_eq!(it.last(), Some(&Page(total_pages)));
                assert!(it.contains(&Page(current_page)));

                let mut previous = 0;
                for (index, token) in it.iter().enumerate() {
                    match token {
                        Page(page) => {
                            assert!(*page > previous);
                            previous = *page;
                        }
                        Ellipsis => {
                            let Some(Page(next)) = it.get(index + 1) else {
                                panic!("ellipsis must be followed by a page");
                            };
                            assert!(next - previous > 2, "{it:?}");
                        }
                    }
                }
            }
        }
    }
}
