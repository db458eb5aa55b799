//! Paginator
//!
//! Page arithmetic over the filtered list and the clamped navigation
//! operations behind the pagination bar.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page sizes offered by the page-size dropdown
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 15, 20];

/// Current page (1-based) and page width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub current_page: usize,
    pub items_per_page: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            items_per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageState {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn first(&mut self, total_pages: usize) {
        if total_pages > 0 {
            self.current_page = 1;
        }
    }

    pub fn previous(&mut self, total_pages: usize) {
        if total_pages > 0 {
            self.current_page = self.current_page.saturating_sub(1).clamp(1, total_pages);
        }
    }

    pub fn next(&mut self, total_pages: usize) {
        if total_pages > 0 {
            self.current_page = (self.current_page + 1).clamp(1, total_pages);
        }
    }

    pub fn last(&mut self, total_pages: usize) {
        if total_pages > 0 {
            self.current_page = total_pages;
        }
    }

    /// Jump to page `n`, clamped into `[1, total_pages]`
    pub fn set_page(&mut self, n: i64, total_pages: usize) {
        if total_pages > 0 {
            self.current_page = clamp_to_usize(n).clamp(1, total_pages);
        }
    }

    /// Change the page width (minimum 1); always returns to page 1
    pub fn set_page_size(&mut self, n: i64) {
        self.items_per_page = clamp_to_usize(n).max(1);
        self.current_page = 1;
    }

    /// Pull the current page back into range after the list shrank
    pub fn clamp(&mut self, total_pages: usize) {
        self.current_page = self.current_page.clamp(1, total_pages.max(1));
    }
}

/// One computed page of a list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub visible: &'a [T],
    pub total_pages: usize,
    /// 1-based index of the first visible item, 0 when nothing is visible
    pub range_start: usize,
    /// 1-based index of the last visible item, 0 when nothing is visible
    pub range_end: usize,
}

pub fn total_pages(len: usize, items_per_page: usize) -> usize {
    len.div_ceil(items_per_page.max(1))
}

/// Slice `items` according to `state`.
pub fn page<'a, T>(items: &'a [T], state: &PageState) -> Page<'a, T> {
    let size = state.items_per_page.max(1);
    let total_pages = total_pages(items.len(), size);

    let start = state.current_page.saturating_sub(1).saturating_mul(size).min(items.len());
    let end = start.saturating_add(size).min(items.len());
    let visible = &items[start..end];

    let (range_start, range_end) = if visible.is_empty() {
        (0, 0)
    } else {
        (start + 1, end)
    };

    Page {
        visible,
        total_pages,
        range_start,
        range_end,
    }
}

/// Parse page or page-size text from an input element; non-numeric becomes 1
pub fn parse_clamped(input: &str) -> i64 {
    input.trim().parse::<i64>().map(|n| n.max(1)).unwrap_or(1)
}

fn clamp_to_usize(n: i64) -> usize {
    usize::try_from(n.max(1)).unwrap_or(usize::MAX)
}
