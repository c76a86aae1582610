//! The derived page a screen renders.

use serde::Serialize;

use listview_core::{RecordId, Row};

/// Result of running a query: one page of matched, sorted rows.
///
/// Borrows the rows from the collection it was computed from.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct View<'a, R> {
    /// Rows on the current page.
    pub items: Vec<&'a R>,

    /// Rows matching search and filters, across all pages.
    pub total_matched: usize,

    pub total_pages: usize,

    /// Page shown, after clamping.
    pub page: usize,

    /// Page the descriptor asked for.
    pub requested_page: usize,

    pub page_size: usize,
}

// Manual impl: derive would require `R: Clone`.
impl<R> Clone for View<'_, R> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            total_matched: self.total_matched,
            total_pages: self.total_pages,
            page: self.page,
            requested_page: self.requested_page,
            page_size: self.page_size,
        }
    }
}

impl<R: Row> View<'_, R> {
    /// Ids of the rows on this page, in display order.
    pub fn visible_ids(&self) -> Vec<RecordId> {
        self.items.iter().map(|row| row.id()).collect()
    }
}

impl<R> View<'_, R> {
    /// Number of rows on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing matched.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether the requested page was out of range and got adjusted.
    pub fn was_clamped(&self) -> bool {
        self.page != self.requested_page
    }

    /// 1-indexed, inclusive position of this page within the matched rows,
    /// for "Showing 11-20 of 25". `None` for an empty page.
    pub fn item_range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = (self.page - 1) * self.page_size + 1;
        Some((first, first + self.items.len() - 1))
    }
}
