//! Query Engine
//!
//! The QueryEngine turns a record collection and a query descriptor into the
//! page a screen renders:
//!
//! ```text
//! records + descriptor
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ validate against │  unknown fields, page_size == 0
//! │ screen schema    │  -> QueryError
//! └────────┬─────────┘
//!          ▼
//!   search AND filters     (input order preserved)
//!          │
//!          ▼
//!   stable sort            (skipped when unsorted)
//!          │
//!          ▼
//!   paginate + clamp
//!          │
//!          ▼
//!        View
//! ```
//!
//! The engine holds only the schema. It never mutates records, descriptors
//! or selections, so the same inputs always produce the same view.

use listview_core::{
    FieldRole, FieldSpec, QueryDescriptor, QueryError, Row, Schema, ScreenSpec, SortDirection,
};

use crate::view::View;

mod filter;
mod paginate;
mod sort;

pub use paginate::{paginate, Page};

use filter::Predicate;

// =============================================================================
// Query Engine
// =============================================================================

/// Search, filter, sort and paginate rows of one screen.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    schema: Schema,
}

impl QueryEngine {
    /// Create an engine for a schema.
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }

    /// Create an engine for a configured screen.
    pub fn for_screen(screen: &ScreenSpec) -> Self {
        Self::new(screen.schema().clone())
    }

    /// The schema queries are checked against.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Check a descriptor against the schema.
    ///
    /// Only the shape is checked: page size, and that every referenced field
    /// exists and allows its use. Search text and filter values are data and
    /// are never rejected.
    pub fn validate(&self, descriptor: &QueryDescriptor) -> Result<(), QueryError> {
        if descriptor.page_size == 0 {
            return Err(QueryError::InvalidPageSize(descriptor.page_size));
        }
        Predicate::compile(&self.schema, descriptor)?;
        if let Some(field) = &descriptor.sort_field {
            self.require_sortable(field)?;
        }
        Ok(())
    }

    fn require_sortable(&self, field: &str) -> Result<&FieldSpec, QueryError> {
        let spec = self.schema.require(field, FieldRole::Sort)?;
        if !spec.sortable {
            return Err(QueryError::NotSortable(field.to_string()));
        }
        Ok(spec)
    }

    // =========================================================================
    // Pipeline Stages
    // =========================================================================

    /// Rows passing the search text and every active filter, in input order.
    pub fn apply_filter<'a, R: Row>(
        &self,
        records: &'a [R],
        descriptor: &QueryDescriptor,
    ) -> Result<Vec<&'a R>, QueryError> {
        let predicate = Predicate::compile(&self.schema, descriptor)?;
        Ok(records.iter().filter(|r| predicate.matches(*r)).collect())
    }

    /// Stable sort of matched rows.
    ///
    /// `Unsorted`, or no sort field, returns the input unchanged.
    pub fn apply_sort<'a, R: Row>(
        &self,
        matched: Vec<&'a R>,
        sort_field: Option<&str>,
        direction: SortDirection,
    ) -> Result<Vec<&'a R>, QueryError> {
        let field = match (sort_field, direction) {
            (Some(field), SortDirection::Ascending | SortDirection::Descending) => field,
            _ => return Ok(matched),
        };
        let spec = self.require_sortable(field)?;
        Ok(sort::sort_rows(matched, spec, direction))
    }

    /// Run the whole pipeline.
    pub fn run<'a, R: Row>(
        &self,
        records: &'a [R],
        descriptor: &QueryDescriptor,
    ) -> Result<View<'a, R>, QueryError> {
        self.validate(descriptor)?;

        let matched = self.apply_filter(records, descriptor)?;
        let total_matched = matched.len();
        let sorted = self.apply_sort(
            matched,
            descriptor.sort_field.as_deref(),
            descriptor.sort_direction,
        )?;
        let page = paginate(sorted, descriptor.page, descriptor.page_size)?;

        tracing::debug!(
            "Query matched {} of {} records, page {}/{}",
            total_matched,
            records.len(),
            page.clamped_page,
            page.total_pages
        );
        if page.clamped_page != descriptor.page {
            tracing::debug!(
                "Requested page {} clamped to {}",
                descriptor.page,
                page.clamped_page
            );
        }

        Ok(View {
            items: page.items,
            total_matched,
            total_pages: page.total_pages,
            page: page.clamped_page,
            requested_page: descriptor.page,
            page_size: descriptor.page_size,
        })
    }

    // =========================================================================
    // Descriptor Transitions
    // =========================================================================

    /// Header click, checked against the schema.
    pub fn toggle_sort(
        &self,
        descriptor: &QueryDescriptor,
        field: &str,
    ) -> Result<QueryDescriptor, QueryError> {
        self.require_sortable(field)?;
        Ok(descriptor.toggle_sort(field))
    }
}

// =============================================================================
// Tests
// =============================================================================
