//! Selection set and selection policy.
//!
//! A selection outlives the query that produced it: filtering a selected
//! record out of view does not deselect it. Bulk actions operate on every
//! selected id, visible or not.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::record::RecordId;

/// What happens to the selection when the matched set changes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Selected ids persist across search and filter changes.
    #[default]
    Retain,
    /// Any change to search text or filters clears the selection.
    ClearOnQueryChange,
}

/// State of the "select all on this page" header checkbox.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SelectAllState {
    /// No visible row is selected (or the page is empty).
    None,
    /// Some visible rows are selected.
    Partial,
    /// Every visible row is selected.
    All,
}

/// Record ids checked for bulk actions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Selection {
    ids: BTreeSet<RecordId>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or remove one id.
    pub fn toggle(&self, id: RecordId) -> Self {
        let mut next = self.clone();
        if !next.ids.remove(&id) {
            next.ids.insert(id);
        }
        next
    }

    /// Header checkbox click.
    ///
    /// If every visible id is already selected, removes exactly the visible
    /// ids. Otherwise adds all of them. Ids outside `visible` are untouched.
    pub fn toggle_all_visible(&self, visible: &[RecordId]) -> Self {
        let mut next = self.clone();
        if visible.iter().all(|id| self.ids.contains(id)) {
            for id in visible {
                next.ids.remove(id);
            }
        } else {
            next.ids.extend(visible.iter().copied());
        }
        next
    }

    /// Add one id.
    pub fn select(&self, id: RecordId) -> Self {
        let mut next = self.clone();
        next.ids.insert(id);
        next
    }

    /// Remove one id.
    pub fn deselect(&self, id: RecordId) -> Self {
        let mut next = self.clone();
        next.ids.remove(&id);
        next
    }

    /// Empty selection, e.g. after a bulk action ran.
    pub fn clear(&self) -> Self {
        Self::new()
    }

    /// Drop ids whose records no longer exist in the collection.
    ///
    /// This is the only way a record's removal affects the selection;
    /// filtering it out of view does not.
    pub fn retain_existing<I>(&self, existing: I) -> Self
    where
        I: IntoIterator<Item = RecordId>,
    {
        let existing: BTreeSet<RecordId> = existing.into_iter().collect();
        Self {
            ids: self.ids.intersection(&existing).copied().collect(),
        }
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.ids.iter().copied()
    }

    /// Header checkbox state for the visible page.
    pub fn visible_state(&self, visible: &[RecordId]) -> SelectAllState {
        let selected = visible.iter().filter(|id| self.ids.contains(id)).count();
        match selected {
            0 => SelectAllState::None,
            n if n == visible.len() => SelectAllState::All,
            _ => SelectAllState::Partial,
        }
    }

    /// Number of selected ids not on the visible page.
    pub fn hidden_count(&self, visible: &[RecordId]) -> usize {
        self.ids.iter().filter(|id| !visible.contains(id)).count()
    }
}

impl FromIterator<RecordId> for Selection {
    fn from_iter<I: IntoIterator<Item = RecordId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
