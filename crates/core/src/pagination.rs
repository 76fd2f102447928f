//! Page arithmetic for the item catalog.
//!
//! Page numbers are 1-based. Page 1 starts at offset 0; every later page `p`
//! starts at `p * page_size`, so the rows between `page_size` and
//! `2 * page_size` are never listed. Existing catalog links depend on these
//! offsets, which is why [`PageWindow::compute`] keeps them as they are.

use serde::{Deserialize, Serialize};

use crate::constants::PAGE_SIZE;
use crate::error::PageError;

/// Offset/limit pair plus neighbouring page numbers for one page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    pub current_page: u64,
    /// `current_page - 1`; zero on the first page.
    pub prev_page: u64,
    pub next_page: u64,
    pub offset: u64,
    pub limit: u64,
}

impl PageWindow {
    /// Window for `page` using the catalog's [`PAGE_SIZE`].
    ///
    /// # Errors
    /// Returns [`PageError::InvalidPage`] when `page` is zero or the offset overflows.
    pub fn for_page(page: u64) -> Result<Self, PageError> {
        Self::compute(page, PAGE_SIZE)
    }

    /// Window for `page` with an explicit page size.
    ///
    /// # Errors
    /// Returns [`PageError::InvalidPage`] when `page` or `page_size` is zero,
    /// or when the offset does not fit in a `u64`.
    pub fn compute(page: u64, page_size: u64) -> Result<Self, PageError> {
        if page == 0 {
            return Err(PageError::InvalidPage("page numbers start at 1".to_owned()));
        }
        if page_size == 0 {
            return Err(PageError::InvalidPage("page size must be positive".to_owned()));
        }
        let offset = if page == 1 {
            0
        } else {
            page.checked_mul(page_size)
                .ok_or_else(|| PageError::InvalidPage(format!("page {page} is out of range")))?
        };
        let next_page = page
            .checked_add(1)
            .ok_or_else(|| PageError::InvalidPage(format!("page {page} is out of range")))?;
        Ok(Self { current_page: page, prev_page: page - 1, next_page, offset, limit: page_size })
    }
}

/// Parse a page number taken from a request path.
///
/// # Errors
/// Returns [`PageError::InvalidPage`] unless `raw` is a positive base-10 integer.
pub fn parse_page(raw: &str) -> Result<u64, PageError> {
    let trimmed = raw.trim();
    match trimmed.parse::<u64>() {
        Ok(0) => Err(PageError::InvalidPage(format!("'{trimmed}' is not a positive page number"))),
        Ok(page) => Ok(page),
        Err(_) => Err(PageError::InvalidPage(format!("'{trimmed}' is not a page number"))),
    }
}

/// Last page number for `total_count` rows (integer division).
#[must_use]
pub fn last_page(total_count: u64, page_size: u64) -> u64 {
    total_count.checked_div(page_size).unwrap_or(0)
}

/// One bounded page of catalog entries plus navigation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: u64,
    pub prev_page: u64,
    pub next_page: u64,
    pub last_page: u64,
    pub page_size: u64,
    /// Row count reported by the store when the page was assembled.
    pub total_items: u64,
}

impl<T> Page<T> {
    #[must_use]
    pub fn new(window: PageWindow, items: Vec<T>, total_items: u64) -> Self {
        Self {
            items,
            current_page: window.current_page,
            prev_page: window.prev_page,
            next_page: window.next_page,
            last_page: last_page(total_items, window.limit),
            page_size: window.limit,
            total_items,
        }
    }

    /// Whether a previous page link should be rendered.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.prev_page >= 1
    }

    /// Whether a next page link should be rendered.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next_page <= self.last_page
    }
}
