//! Stable column sort.

use std::cmp::Ordering;

use listview_core::{FieldSpec, Row, SortDirection, SortKey};

/// Sort rows by one field.
///
/// Keys are computed once per row. `slice::sort_by` is stable, so rows with
/// equal keys keep their input order in both directions. Unkeyed rows go
/// last, ordered by id.
pub(crate) fn sort_rows<'a, R: Row>(
    rows: Vec<&'a R>,
    spec: &FieldSpec,
    direction: SortDirection,
) -> Vec<&'a R> {
    let descending = match direction {
        SortDirection::Unsorted => return rows,
        SortDirection::Ascending => false,
        SortDirection::Descending => true,
    };

    let mut keyed: Vec<(Option<SortKey>, &'a R)> = rows
        .into_iter()
        .map(|row| (spec.sort_key(row.value(&spec.name).as_deref()), row))
        .collect();

    let unkeyed = keyed.iter().filter(|(key, _)| key.is_none()).count();
    if unkeyed > 0 {
        tracing::debug!(
            "{} row(s) have no usable '{}' value; ordering them by id",
            unkeyed,
            spec.name
        );
    }

    keyed.sort_by(|(key_a, row_a), (key_b, row_b)| match (key_a, key_b) {
        (Some(a), Some(b)) => {
            let ordering = a.compare(b);
            if descending {
                ordering.reverse()
            } else {
                ordering
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => row_a.id().cmp(&row_b.id()),
    });

    keyed.into_iter().map(|(_, row)| row).collect()
}
