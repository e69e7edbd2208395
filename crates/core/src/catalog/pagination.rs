//! Pagination engine.
//!
//! Pages are 1-based. Page `n` covers `[(n - 1) * size, n * size)` of the
//! filtered sequence.

use std::ops::RangeInclusive;

/// Items per catalog page.
pub const PAGE_SIZE: usize = 8;

/// Number of pages needed for `len` items. Zero when there are no items.
#[must_use]
pub const fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Slice out page `page` (1-based) of `items`.
///
/// Out-of-range pages (including page 0) yield an empty slice; callers are
/// expected to offer only `1..=page_count`.
#[must_use]
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let Some(start) = page.checked_sub(1).and_then(|p| p.checked_mul(page_size)) else {
        return &[];
    };
    let end = start.saturating_add(page_size).min(items.len());
    items.get(start..end).unwrap_or(&[])
}

/// Page navigation state for a filtered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
}

impl Pagination {
    /// Pagination for `len` items with `current_page` clamped into range.
    #[must_use]
    pub fn new(len: usize, page_size: usize, current_page: usize) -> Self {
        let total_pages = page_count(len, page_size);
        Self {
            current_page: current_page.clamp(1, total_pages.max(1)),
            total_pages,
        }
    }

    /// The page buttons to render. Empty when there is nothing to show.
    #[must_use]
    pub const fn page_numbers(&self) -> RangeInclusive<usize> {
        // 1..=0 is empty
        1..=self.total_pages
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}
