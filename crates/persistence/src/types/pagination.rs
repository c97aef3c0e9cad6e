//! Pagination types for search results.
//!
//! Variant searches use page-number pagination over the fixed coordinate sort
//! order: page `n` of size `s` covers result positions `n * s .. (n + 1) * s`.
//! GA4GH clients carry the page number as an opaque numeric page token.

use serde::{Deserialize, Serialize};

/// Page size used when the caller does not request one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Pagination configuration for a search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pagination {
    /// Zero-based page number.
    page: u32,

    /// Maximum number of results per page.
    size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Creates pagination for the given page number and page size.
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// Creates pagination for the first page with the given size.
    pub fn first(size: u32) -> Self {
        Self::new(0, size)
    }

    /// Creates pagination from a GA4GH page token.
    ///
    /// Tokens are decimal page numbers. A missing, empty, or non-numeric token
    /// selects the first page.
    pub fn from_page_token(token: Option<&str>, size: u32) -> Self {
        let page = token
            .map(str::trim)
            .filter(|t| !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|t| t.parse().ok())
            .unwrap_or(0);
        Self::new(page, size)
    }

    /// Returns the zero-based page number.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Returns the page size.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of results skipped before this page starts.
    pub fn skip(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }

    /// Maximum number of results on this page.
    pub fn limit(&self) -> u32 {
        self.size
    }

    /// Returns the pagination for the following page.
    pub fn next(&self) -> Self {
        Self::new(self.page.saturating_add(1), self.size)
    }

    /// Returns the token of the following page, if `total` matches extend past
    /// this one.
    pub fn next_page_token(&self, total: u64) -> Option<String> {
        let last_on_page = self.skip() + u64::from(self.size);
        (last_on_page < total).then(|| self.next().page.to_string())
    }
}
