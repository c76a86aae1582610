//! Query descriptor: what subset, in what order, on what page.
//!
//! The descriptor is plain data. Every transition takes `&self` and returns
//! a new descriptor, so a screen can keep the previous value around for
//! comparison or undo.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::record::Value;

/// Default page size for screens that don't configure one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Column sort direction. Repeated clicks on one header cycle
/// `Ascending -> Descending -> Unsorted`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
    /// Original collection order.
    #[default]
    #[serde(rename = "none")]
    Unsorted,
}

/// Complete, serializable query state of one list screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QueryDescriptor {
    /// Free-text search. Empty means no text filter.
    #[serde(default)]
    pub search_text: String,

    /// Fields checked against `search_text`; any one matching is enough.
    #[serde(default)]
    pub search_fields: Vec<String>,

    /// Required value per field. `None`, null and empty text mean
    /// "no constraint" and are skipped.
    #[serde(default)]
    pub filters: BTreeMap<String, Option<Value>>,

    /// Active sort column. Cleared when the direction cycles back to `Unsorted`.
    #[serde(default)]
    pub sort_field: Option<String>,

    #[serde(default)]
    pub sort_direction: SortDirection,

    /// 1-indexed page number.
    #[serde(default = "first_page")]
    pub page: usize,

    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn first_page() -> usize {
    1
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for QueryDescriptor {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            search_fields: Vec::new(),
            filters: BTreeMap::new(),
            sort_field: None,
            sort_direction: SortDirection::Unsorted,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryDescriptor {
    /// Create a descriptor searching the given fields.
    pub fn new<I, S>(search_fields: I, page_size: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            search_fields: search_fields.into_iter().map(Into::into).collect(),
            page_size,
            ..Self::default()
        }
    }

    /// Advance the tri-state sort cycle for a header click.
    ///
    /// A different column starts at ascending. The same column goes
    /// ascending -> descending -> unsorted, and unsorted clears `sort_field`.
    pub fn toggle_sort(&self, field: &str) -> Self {
        let (sort_field, sort_direction) = match (&self.sort_field, self.sort_direction) {
            (Some(current), SortDirection::Ascending) if current == field => {
                (Some(field.to_string()), SortDirection::Descending)
            }
            (Some(current), SortDirection::Descending) if current == field => {
                (None, SortDirection::Unsorted)
            }
            _ => (Some(field.to_string()), SortDirection::Ascending),
        };
        Self {
            sort_field,
            sort_direction,
            ..self.clone()
        }
    }

    /// Set sort column and direction directly.
    pub fn with_sort(&self, field: Option<&str>, direction: SortDirection) -> Self {
        let sort_field = match direction {
            SortDirection::Unsorted => None,
            _ => field.map(str::to_string),
        };
        Self {
            sort_field,
            sort_direction: if field.is_some() {
                direction
            } else {
                SortDirection::Unsorted
            },
            ..self.clone()
        }
    }

    /// Replace the search text and go back to the first page.
    pub fn with_search_text(&self, text: impl Into<String>) -> Self {
        Self {
            search_text: text.into(),
            page: 1,
            ..self.clone()
        }
    }

    /// Constrain a field and go back to the first page.
    ///
    /// Passing `None` keeps the key but marks it as "no constraint", the
    /// way an "All" dropdown entry does.
    pub fn with_filter(&self, field: impl Into<String>, value: Option<Value>) -> Self {
        let mut next = self.clone();
        next.filters.insert(field.into(), value);
        next.page = 1;
        next
    }

    /// Remove a filter entry and go back to the first page.
    pub fn without_filter(&self, field: &str) -> Self {
        let mut next = self.clone();
        next.filters.remove(field);
        next.page = 1;
        next
    }

    /// Remove all filters and the search text.
    pub fn clear_filters(&self) -> Self {
        Self {
            search_text: String::new(),
            filters: BTreeMap::new(),
            page: 1,
            ..self.clone()
        }
    }

    /// Move to a page. Out-of-range pages are clamped by the engine.
    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// Change page size and go back to the first page.
    pub fn with_page_size(&self, page_size: usize) -> Self {
        Self {
            page_size,
            page: 1,
            ..self.clone()
        }
    }

    /// Filters that constrain results, in field-name order.
    pub fn active_filters(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.filters.iter().filter_map(|(field, value)| match value {
            Some(v) if !v.is_blank() => Some((field.as_str(), v)),
            _ => None,
        })
    }

    /// Whether search text or any active filter narrows the collection.
    pub fn is_filtered(&self) -> bool {
        !self.search_text.is_empty() || self.active_filters().next().is_some()
    }

    /// Whether two descriptors select the same matched set, ignoring
    /// order and paging.
    pub fn same_matches(&self, other: &QueryDescriptor) -> bool {
        self.search_text == other.search_text
            && self.search_fields == other.search_fields
            && self.active_filters().eq(other.active_filters())
    }
}
