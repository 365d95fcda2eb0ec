//! Offset pagination arithmetic.
//!
//! Page indices are 1-based. Page sizes are clamped to a maximum; a
//! non-positive page size is not an error but collapses everything onto a
//! single page starting at row zero.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Page size used when the caller does not request one.
pub const DEFAULT_PAGE_SIZE: i64 = 30;

/// Upper bound applied to requested page sizes by default.
pub const DEFAULT_MAX_PAGE_SIZE: i64 = 100;

/// Page count and first-row offset for one page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Number of pages needed to show every row.
    pub total_pages: u64,
    /// Zero-based index of the first row on the requested page.
    pub row_offset: u64,
}

impl Pagination {
    const SINGLE_PAGE: Self = Self {
        total_pages: 1,
        row_offset: 0,
    };
}

/// Compute the page count and row offset for a page request.
///
/// `page_size` is clamped to `max_page_size`. A page index of zero is
/// treated as the first page.
///
/// # Examples
///
/// ```
/// use helper_kit::{Pagination, paginate};
///
/// assert_eq!(
///     paginate(95, 2, 30, 100),
///     Pagination { total_pages: 4, row_offset: 30 }
/// );
/// assert_eq!(paginate(95, 3, 0, 100), Pagination { total_pages: 1, row_offset: 0 });
/// ```
#[must_use]
pub fn paginate(
    total_rows: u64,
    page_index: u64,
    page_size: i64,
    max_page_size: i64,
) -> Pagination {
    let clamped = page_size.min(max_page_size);
    let Some(size) = u64::try_from(clamped).ok().filter(|size| *size > 0) else {
        debug!(page_size, max_page_size, "non-positive page size, using a single page");
        return Pagination::SINGLE_PAGE;
    };

    Pagination {
        total_pages: total_rows.div_ceil(size),
        row_offset: page_index.saturating_sub(1).saturating_mul(size),
    }
}

/// Serialisable pagination defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaginationConfig {
    /// Page size used when a request omits one.
    pub page_size: i64,
    /// Largest page size a request may ask for.
    pub max_page_size: i64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

impl PaginationConfig {
    /// Paginate with these defaults, optionally overriding the page size.
    ///
    /// ```
    /// use helper_kit::PaginationConfig;
    ///
    /// let config = PaginationConfig::default();
    /// assert_eq!(config.paginate(95, 1, None).total_pages, 4);
    /// assert_eq!(config.paginate(1_000, 2, Some(500)).row_offset, 100);
    /// ```
    #[must_use]
    pub fn paginate(&self, total_rows: u64, page_index: u64, page_size: Option<i64>) -> Pagination {
        paginate(
            total_rows,
            page_index,
            page_size.unwrap_or(self.page_size),
            self.max_page_size,
        )
    }
}
