//! Search and filter predicate.

use listview_core::{FieldRole, FieldSpec, QueryDescriptor, QueryError, Row, Schema, Value};

/// A descriptor's search text and filters, resolved against a schema.
///
/// Compiling validates every referenced field once, so matching a record
/// cannot fail.
pub(crate) struct Predicate<'q> {
    /// Lowercased search text. `None` when the search box is empty.
    needle: Option<String>,
    search_fields: Vec<&'q str>,
    filters: Vec<(&'q FieldSpec, &'q Value)>,
}

impl<'q> Predicate<'q> {
    pub(crate) fn compile(
        schema: &'q Schema,
        descriptor: &'q QueryDescriptor,
    ) -> Result<Self, QueryError> {
        let mut search_fields = Vec::with_capacity(descriptor.search_fields.len());
        for field in &descriptor.search_fields {
            search_fields.push(schema.require(field, FieldRole::Search)?.name.as_str());
        }

        // Every key must be known, even ones currently set to "no constraint".
        for field in descriptor.filters.keys() {
            let spec = schema.require(field, FieldRole::Filter)?;
            if !spec.filterable {
                return Err(QueryError::NotFilterable(field.clone()));
            }
        }

        let mut filters = Vec::new();
        for (field, value) in descriptor.active_filters() {
            filters.push((schema.require(field, FieldRole::Filter)?, value));
        }

        let needle = if descriptor.search_text.is_empty() {
            None
        } else {
            Some(descriptor.search_text.to_lowercase())
        };

        Ok(Self {
            needle,
            search_fields,
            filters,
        })
    }

    /// Text search AND every active filter.
    pub(crate) fn matches<R: Row>(&self, record: &R) -> bool {
        self.matches_search(record) && self.matches_filters(record)
    }

    /// Case-insensitive substring match on any search field.
    ///
    /// With no search fields configured, non-empty text matches nothing.
    fn matches_search<R: Row>(&self, record: &R) -> bool {
        let needle = match &self.needle {
            Some(n) => n,
            None => return true,
        };
        self.search_fields.iter().any(|field| {
            record
                .value(field)
                .is_some_and(|v| v.display_text().to_lowercase().contains(needle.as_str()))
        })
    }

    fn matches_filters<R: Row>(&self, record: &R) -> bool {
        self.filters.iter().all(|(spec, required)| {
            let value = record.value(&spec.name);
            spec.matches_filter(value.as_deref(), required)
        })
    }
}
