//! Pagination state for GitLab list endpoints.
//!
//! GitLab reports the page count in the `x-total-pages` response header.
//! [`PageInfo`] captures the current position so callers can walk pages
//! `1..=total_pages` in order.

use http::HeaderMap;

/// Largest page size GitLab accepts.
pub const MAX_PER_PAGE: u8 = 100;

/// Response header carrying the total page count.
pub const TOTAL_PAGES_HEADER: &str = "x-total-pages";

/// Position within a paginated GitLab collection, as reported by the
/// `x-total-pages` header.
///
/// # Example
///
/// ```
/// use mrtally::gitlab::pagination::PageInfo;
///
/// let info = PageInfo::new(2, 100).with_total_pages(3);
/// assert!(!info.is_first_page());
/// assert!(info.has_next());
/// assert_eq!(info.next_page(), Some(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// 1-based.
    current_page: u32,
    per_page: u8,
    /// Total number of pages, at least 1.
    total_pages: u32,
}

impl PageInfo {
    /// Creates page info for a single-page result.
    #[must_use]
    pub const fn new(current_page: u32, per_page: u8) -> Self {
        Self {
            current_page,
            per_page,
            total_pages: 1,
        }
    }

    /// Sets the total number of pages. Zero is treated as one.
    #[must_use]
    pub const fn with_total_pages(mut self, total_pages: u32) -> Self {
        self.total_pages = if total_pages == 0 { 1 } else { total_pages };
        self
    }

    /// Reads the total page count from response headers.
    ///
    /// A missing or unparseable `x-total-pages` header means one page.
    #[must_use]
    pub fn from_headers(current_page: u32, per_page: u8, headers: &HeaderMap) -> Self {
        let total_pages = headers
            .get(TOTAL_PAGES_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u32>().ok())
            .unwrap_or(1);
        Self::new(current_page, per_page).with_total_pages(total_pages)
    }

    /// Page this response belongs to.
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Requested page size.
    #[must_use]
    pub const fn per_page(&self) -> u8 {
        self.per_page
    }

    /// Returns the total number of pages.
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Whether another page follows.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Returns the page after this one, if any.
    #[must_use]
    pub const fn next_page(&self) -> Option<u32> {
        if self.has_next() {
            Some(self.current_page + 1)
        } else {
            None
        }
    }

    /// Whether this is page 1.
    #[must_use]
    pub const fn is_first_page(&self) -> bool {
        self.current_page == 1
    }

    /// Whether no page follows.
    #[must_use]
    pub const fn is_last_page(&self) -> bool {
        !self.has_next()
    }
}

impl Default for PageInfo {
    fn default() -> Self {
        Self::new(1, MAX_PER_PAGE)
    }
}
