//! Page slicing with clamping.

use listview_core::QueryError;

/// One page cut from a sorted sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Rows on the page.
    pub items: Vec<T>,

    /// `max(1, ceil(len / page_size))`.
    pub total_pages: usize,

    /// The page actually shown. Differs from the requested page when that
    /// was past the end (or zero).
    pub clamped_page: usize,
}

/// Cut page `page` (1-indexed) out of `sorted`.
///
/// A page past the last one is clamped to the last page, and page 0 to
/// page 1. An empty input still has one (empty) page.
pub fn paginate<T>(sorted: Vec<T>, page: usize, page_size: usize) -> Result<Page<T>, QueryError> {
    if page_size == 0 {
        return Err(QueryError::InvalidPageSize(page_size));
    }

    let total_pages = sorted.len().div_ceil(page_size).max(1);
    let clamped_page = page.clamp(1, total_pages);
    let start = (clamped_page - 1) * page_size;

    let items = sorted.into_iter().skip(start).take(page_size).collect();

    Ok(Page {
        items,
        total_pages,
        clamped_page,
    })
}
