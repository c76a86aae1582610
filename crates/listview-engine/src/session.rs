//! Screen session: the host-side state of one mounted list screen.
//!
//! A session owns the loaded records, the current descriptor and the
//! selection. Each method corresponds to a user interaction: it derives the
//! next descriptor, runs the engine once to validate and clamp it, and
//! stores the result. The records themselves are never modified.

use listview_core::{
    QueryDescriptor, QueryError, Record, RecordId, Row, ScreenSpec, SelectAllState, Selection,
    SelectionPolicy, Value,
};

use crate::engine::QueryEngine;
use crate::error::EngineResult;
use crate::source::RecordSource;
use crate::view::View;

/// One mounted list screen.
#[derive(Debug)]
pub struct ScreenSession<R = Record> {
    screen: ScreenSpec,
    engine: QueryEngine,
    records: Vec<R>,
    descriptor: QueryDescriptor,
    /// Page the last interaction asked for, before clamping.
    requested_page: usize,
    selection: Selection,
}

impl ScreenSession<Record> {
    /// Load records from a source and mount the screen.
    pub fn mount(screen: ScreenSpec, source: &dyn RecordSource) -> EngineResult<Self> {
        let records = source.load()?;
        tracing::info!(
            "Mounted screen '{}' with {} records from {}",
            screen.id,
            records.len(),
            source.name()
        );
        Self::new(screen, records)
    }
}

impl<R: Row> ScreenSession<R> {
    /// Mount a screen over already-loaded records.
    pub fn new(screen: ScreenSpec, records: Vec<R>) -> EngineResult<Self> {
        screen.validate()?;
        let engine = QueryEngine::for_screen(&screen);
        let descriptor = screen.initial_descriptor();
        engine.validate(&descriptor)?;
        Ok(Self {
            screen,
            engine,
            records,
            requested_page: descriptor.page,
            descriptor,
            selection: Selection::new(),
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn screen(&self) -> &ScreenSpec {
        &self.screen
    }

    pub fn engine(&self) -> &QueryEngine {
        &self.engine
    }

    pub fn descriptor(&self) -> &QueryDescriptor {
        &self.descriptor
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Page the last interaction asked for. Differs from
    /// `descriptor().page` when that request was clamped.
    pub fn requested_page(&self) -> usize {
        self.requested_page
    }

    /// The page to render for the current descriptor.
    ///
    /// `requested_page` reports the page the last interaction asked for, so
    /// a clamped "go to page" stays visible to the host.
    pub fn view(&self) -> Result<View<'_, R>, QueryError> {
        let mut view = self.engine.run(&self.records, &self.descriptor)?;
        view.requested_page = self.requested_page;
        Ok(view)
    }

    // =========================================================================
    // Query Interactions
    // =========================================================================

    /// Replace the descriptor.
    ///
    /// The engine runs once to validate it; a page past the end is clamped
    /// and the clamped page is stored. Under `ClearOnQueryChange` the
    /// selection is cleared when the matched set may differ.
    pub fn apply(&mut self, next: QueryDescriptor) -> Result<(), QueryError> {
        let page = self.engine.run(&self.records, &next)?.page;

        if self.screen.selection_policy == SelectionPolicy::ClearOnQueryChange
            && !self.selection.is_empty()
            && !self.descriptor.same_matches(&next)
        {
            tracing::debug!(
                "Query changed on '{}', clearing {} selected",
                self.screen.id,
                self.selection.len()
            );
            self.selection = self.selection.clear();
        }

        self.requested_page = next.page;
        self.descriptor = QueryDescriptor { page, ..next };
        Ok(())
    }

    /// Search box input.
    pub fn search(&mut self, text: &str) -> Result<(), QueryError> {
        let next = self.descriptor.with_search_text(text);
        self.apply(next)
    }

    /// Filter dropdown change. `None` is the "All" entry.
    pub fn set_filter(&mut self, field: &str, value: Option<Value>) -> Result<(), QueryError> {
        let next = self.descriptor.with_filter(field, value);
        self.apply(next)
    }

    pub fn clear_filter(&mut self, field: &str) -> Result<(), QueryError> {
        let next = self.descriptor.without_filter(field);
        self.apply(next)
    }

    /// "Reset" button: drop search text and every filter.
    pub fn clear_filters(&mut self) -> Result<(), QueryError> {
        let next = self.descriptor.clear_filters();
        self.apply(next)
    }

    /// Column header click.
    pub fn click_header(&mut self, field: &str) -> Result<(), QueryError> {
        let next = self.engine.toggle_sort(&self.descriptor, field)?;
        self.apply(next)
    }

    pub fn go_to_page(&mut self, page: usize) -> Result<(), QueryError> {
        let next = self.descriptor.with_page(page);
        self.apply(next)
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), QueryError> {
        let next = self.descriptor.with_page_size(page_size);
        self.apply(next)
    }

    // =========================================================================
    // Selection Interactions
    // =========================================================================

    /// Row checkbox.
    pub fn toggle_row(&mut self, id: RecordId) {
        self.selection = self.selection.toggle(id);
    }

    /// Header checkbox. Only affects rows on the current page.
    pub fn toggle_all_visible(&mut self) -> Result<(), QueryError> {
        let visible = self.view()?.visible_ids();
        self.selection = self.selection.toggle_all_visible(&visible);
        Ok(())
    }

    /// State of the header checkbox.
    pub fn select_all_state(&self) -> Result<SelectAllState, QueryError> {
        let visible = self.view()?.visible_ids();
        Ok(self.selection.visible_state(&visible))
    }

    /// Selected rows not on the current page.
    pub fn hidden_selected(&self) -> Result<usize, QueryError> {
        let visible = self.view()?.visible_ids();
        Ok(self.selection.hidden_count(&visible))
    }

    /// Every selected record, visible or not, in collection order.
    pub fn selected_records(&self) -> Vec<&R> {
        self.records
            .iter()
            .filter(|r| self.selection.contains(r.id()))
            .collect()
    }

    /// Hand the selection to a bulk action, leaving it empty.
    pub fn take_selection(&mut self) -> Selection {
        tracing::debug!(
            "Bulk action on '{}' with {} selected",
            self.screen.id,
            self.selection.len()
        );
        std::mem::take(&mut self.selection)
    }

    // =========================================================================
    // Collection Changes
    // =========================================================================

    /// Swap in a reloaded collection, e.g. after a bulk delete.
    ///
    /// Selected ids whose records are gone are dropped; the rest stay
    /// selected. The current page is re-clamped.
    pub fn replace_records(&mut self, records: Vec<R>) -> Result<(), QueryError> {
        self.records = records;
        let before = self.selection.len();
        self.selection = self
            .selection
            .retain_existing(self.records.iter().map(|r| r.id()));
        if self.selection.len() != before {
            tracing::debug!(
                "Dropped {} selected ids no longer in '{}'",
                before - self.selection.len(),
                self.screen.id
            );
        }
        let current = self.descriptor.clone();
        self.apply(current)
    }
}

// =============================================================================
// Tests
// =============================================================================
