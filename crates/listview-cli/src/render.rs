//! Plain-text table rendering of a view.

use std::fmt::Write;

use unicode_width::UnicodeWidthStr;

use listview_core::{QueryDescriptor, Record, Row, Schema, Selection, SortDirection};
use listview_engine::View;

/// Render one page as an aligned table with a summary footer.
pub fn render_table(
    schema: &Schema,
    descriptor: &QueryDescriptor,
    view: &View<'_, Record>,
    selection: &Selection,
) -> String {
    let mut header = vec![" ".to_string(), "id".to_string()];
    for field in schema.iter() {
        let marker = match (&descriptor.sort_field, descriptor.sort_direction) {
            (Some(sorted), SortDirection::Ascending) if *sorted == field.name => " ^",
            (Some(sorted), SortDirection::Descending) if *sorted == field.name => " v",
            _ => "",
        };
        header.push(format!("{}{}", field.name, marker));
    }

    let rows: Vec<Vec<String>> = view
        .items
        .iter()
        .map(|record| {
            let mut cells = vec![
                if selection.contains(record.id) { "x" } else { " " }.to_string(),
                record.id.to_string(),
            ];
            for field in schema.iter() {
                cells.push(
                    record
                        .get(&field.name)
                        .map(|v| v.display_text().into_owned())
                        .unwrap_or_default(),
                );
            }
            cells
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.width()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out.push_str(&summary(view, selection));
    out.push('\n');
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str(" | ");
        }
        line.push_str(cell);
        // pad by display width, not byte length
        line.push_str(&" ".repeat(width.saturating_sub(cell.width())));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

/// "Showing 1-10 of 25 | page 1/3 | 2 selected (1 not shown)"
pub fn summary<R: Row>(view: &View<'_, R>, selection: &Selection) -> String {
    let mut out = match view.item_range() {
        Some((first, last)) => format!("Showing {}-{} of {}", first, last, view.total_matched),
        None => "No matching records".to_string(),
    };
    let _ = write!(out, " | page {}/{}", view.page, view.total_pages);
    if view.was_clamped() {
        let _ = write!(out, " (requested {})", view.requested_page);
    }
    if !selection.is_empty() {
        let hidden = selection.hidden_count(&view.visible_ids());
        let _ = write!(out, " | {} selected", selection.len());
        if hidden > 0 {
            let _ = write!(out, " ({} not shown)", hidden);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use listview_core::{FieldSpec, RecordId};
    use listview_engine::QueryEngine;

    fn schema() -> Schema {
        Schema::new(vec![FieldSpec::text("name"), FieldSpec::number("rating")])
    }

    fn records() -> Vec<Record> {
        vec![
            Record::new(1).with("name", "Chloé").with("rating", 4.5),
            Record::new(2).with("name", "Bo").with("rating", 4),
            Record::new(3).with("name", "Ann").with("rating", 3),
        ]
    }

    #[test]
    fn test_render_table_aligns_unicode() {
        let records = records();
        let engine = QueryEngine::new(schema());
        let descriptor = QueryDescriptor::new(["name"], 3).toggle_sort("name");
        let view = engine.run(&records, &descriptor).unwrap();
        let selection = Selection::new().toggle(RecordId(2)).toggle(RecordId(1));

        let table = render_table(&schema(), &descriptor, &view, &selection);
        let expected = [
            "  | id | name ^ | rating",
            "- | -- | ------ | ------",
            "  | 3  | Ann    | 3",
            "x | 2  | Bo     | 4",
            "x | 1  | Chloé  | 4.5",
            "Showing 1-3 of 3 | page 1/1 | 2 selected",
            "",
        ]
        .join("\n");
        assert_eq!(table, expected);
    }

    #[test]
    fn test_summary_empty_and_clamped() {
        let records = records();
        let engine = QueryEngine::new(schema());
        let descriptor = QueryDescriptor::new(["name"], 2)
            .with_search_text("zzz")
            .with_page(4);
        let view = engine.run(&records, &descriptor).unwrap();
        let selection = Selection::new().toggle(RecordId(1));
        assert_eq!(
            summary(&view, &selection),
            "No matching records | page 1/1 (requested 4) | 1 selected (1 not shown)"
        );
    }
}
