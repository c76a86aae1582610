//! Field schema for a screen.
//!
//! A schema names the fields a screen searches, filters and sorts on, and
//! declares how each one compares:
//!
//! | Kind     | Sort order                     | Accepted values                                   |
//! |----------|--------------------------------|---------------------------------------------------|
//! | `text`   | collation (`folded`/`ordinal`) | any non-null value, via its display text          |
//! | `number` | numeric                        | numbers, or text parsing as a finite number       |
//! | `date`   | chronological                  | dates, or text in one of [`DATE_FORMATS`]/RFC 3339 |
//!
//! A value that cannot be turned into a key for its field's kind (missing,
//! null, unparseable) is *unkeyed*. Unkeyed records sort after keyed ones in
//! both directions, ordered among themselves by ascending record id.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::error::{FieldRole, QueryError};
use crate::record::Value;

/// Text formats accepted for date fields, tried in order after RFC 3339.
pub const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Text formats accepted for timestamp values in date fields.
pub const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// How a field's values compare.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Number,
    Date,
}

/// String ordering for text fields.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Collation {
    /// Case-insensitive: compares Unicode-lowercased text.
    #[default]
    Folded,
    /// Case-sensitive code-point order.
    Ordinal,
}

/// A precomputed sort key. Keys of one field always share a variant.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Number(f64),
    Date(NaiveDateTime),
    Text(String),
}

impl SortKey {
    /// Total order between two keys.
    pub fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Number(_) => 0,
            SortKey::Date(_) => 1,
            SortKey::Text(_) => 2,
        }
    }
}

/// Declaration of one field on a screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldSpec {
    /// Attribute name on the record.
    pub name: String,

    /// Comparison kind.
    #[serde(default)]
    pub kind: FieldKind,

    /// Ordering for text fields. Ignored for numbers and dates.
    #[serde(default)]
    pub collation: Collation,

    /// Whether a column header may sort on this field.
    #[serde(default = "default_true")]
    pub sortable: bool,

    /// Whether a filter may constrain this field.
    #[serde(default = "default_true")]
    pub filterable: bool,
}

fn default_true() -> bool {
    true
}

impl FieldSpec {
    /// Create a field of the given kind with default flags.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            collation: Collation::default(),
            sortable: true,
            filterable: true,
        }
    }

    /// Shorthand for a text field.
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    /// Shorthand for a number field.
    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Number)
    }

    /// Shorthand for a date field.
    pub fn date(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Date)
    }

    /// Use case-sensitive ordering.
    pub fn ordinal(mut self) -> Self {
        self.collation = Collation::Ordinal;
        self
    }

    /// Disallow sorting on this field.
    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Disallow filtering on this field.
    pub fn not_filterable(mut self) -> Self {
        self.filterable = false;
        self
    }

    /// Derive a sort key. `None` means the value is unkeyed.
    pub fn sort_key(&self, value: Option<&Value>) -> Option<SortKey> {
        let value = value?;
        match self.kind {
            FieldKind::Text => {
                if matches!(value, Value::Null) {
                    return None;
                }
                let text = value.display_text();
                Some(SortKey::Text(match self.collation {
                    Collation::Folded => text.to_lowercase(),
                    Collation::Ordinal => text.into_owned(),
                }))
            }
            FieldKind::Number => number_key(value).map(SortKey::Number),
            FieldKind::Date => date_key(value).map(SortKey::Date),
        }
    }

    /// Whether a record's value satisfies an active filter on this field.
    ///
    /// Text compares exactly. Numbers and dates compare by value, falling
    /// back to display text when the filter value itself is not parseable.
    /// A missing or null record value never matches.
    pub fn matches_filter(&self, value: Option<&Value>, required: &Value) -> bool {
        let value = match value {
            Some(Value::Null) | None => return false,
            Some(v) => v,
        };
        match self.kind {
            FieldKind::Text => value.display_text() == required.display_text(),
            FieldKind::Number => match (number_key(value), number_key(required)) {
                (Some(a), Some(b)) => a == b,
                (None, Some(_)) => false,
                (_, None) => value.display_text() == required.display_text(),
            },
            FieldKind::Date => match (date_key(value), date_key(required)) {
                (Some(a), Some(b)) => a == b,
                (None, Some(_)) => false,
                (_, None) => value.display_text() == required.display_text(),
            },
        }
    }
}

fn number_key(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => *n,
        Value::Text(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn date_key(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::Date(d) => Some(d.and_time(NaiveTime::MIN)),
        Value::Text(s) => parse_date_text(s.trim()),
        _ => None,
    }
}

/// Parse date or timestamp text. Timezone-aware stamps are normalized to UTC.
pub fn parse_date_text(text: &str) -> Option<NaiveDateTime> {
    if let Ok(stamp) = DateTime::parse_from_rfc3339(text) {
        return Some(stamp.naive_utc());
    }
    for format in DATETIME_FORMATS {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(text, format) {
            return Some(stamp);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date.and_time(NaiveTime::MIN));
        }
    }
    None
}

/// Ordered set of field declarations for one screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    /// Create a schema from field declarations.
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// Look up a field.
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Look up a field, failing with a contract violation when absent.
    pub fn require(&self, name: &str, role: FieldRole) -> Result<&FieldSpec, QueryError> {
        self.get(name).ok_or_else(|| QueryError::UnknownField {
            field: name.to_string(),
            role,
        })
    }

    /// Iterate field declarations in order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter()
    }

    /// Field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<FieldSpec> for Schema {
    fn from_iter<I: IntoIterator<Item = FieldSpec>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(spec: &FieldSpec, value: impl Into<Value>) -> Option<SortKey> {
        spec.sort_key(Some(&value.into()))
    }

    #[test]
    fn test_text_collation() {
        let folded = FieldSpec::text("title");
        let ordinal = FieldSpec::text("title").ordinal();

        let a = key(&folded, "apple").unwrap();
        let b = key(&folded, "Banana").unwrap();
        assert_eq!(a.compare(&b), Ordering::Less);

        // "B" < "a" in code-point order
        let a = key(&ordinal, "apple").unwrap();
        let b = key(&ordinal, "Banana").unwrap();
        assert_eq!(a.compare(&b), Ordering::Greater);
    }

    #[test]
    fn test_number_keys() {
        let spec = FieldSpec::number("salary");
        assert_eq!(key(&spec, 10), Some(SortKey::Number(10.0)));
        assert_eq!(key(&spec, " 2.5 "), Some(SortKey::Number(2.5)));
        assert_eq!(key(&spec, "n/a"), None);
        assert_eq!(key(&spec, f64::NAN), None);
        assert_eq!(spec.sort_key(None), None);

        // Numeric, not lexicographic
        let nine = key(&spec, 9).unwrap();
        let ten = key(&spec, 10).unwrap();
        assert_eq!(nine.compare(&ten), Ordering::Less);
    }

    #[test]
    fn test_date_keys() {
        let spec = FieldSpec::date("applied_on");
        let iso = key(&spec, "2024-02-01").unwrap();
        let us = key(&spec, "01/15/2024").unwrap();
        let stamp = key(&spec, "2024-02-01 09:30").unwrap();
        let rfc = key(&spec, "2024-02-01T10:00:00Z").unwrap();

        assert_eq!(us.compare(&iso), Ordering::Less);
        assert_eq!(iso.compare(&stamp), Ordering::Less);
        assert_eq!(stamp.compare(&rfc), Ordering::Less);
        assert_eq!(key(&spec, "next tuesday"), None);
        assert_eq!(key(&spec, 20240201), None);
    }

    #[test]
    fn test_text_null_is_unkeyed() {
        let spec = FieldSpec::text("company");
        assert_eq!(spec.sort_key(Some(&Value::Null)), None);
        assert_eq!(key(&spec, ""), Some(SortKey::Text(String::new())));
    }

    #[test]
    fn test_matches_filter_by_kind() {
        let status = FieldSpec::text("status");
        assert!(status.matches_filter(Some(&"Pending".into()), &"Pending".into()));
        assert!(!status.matches_filter(Some(&"pending".into()), &"Pending".into()));
        assert!(!status.matches_filter(None, &"Pending".into()));

        let rating = FieldSpec::number("rating");
        assert!(rating.matches_filter(Some(&Value::Number(4.0)), &"4".into()));
        assert!(!rating.matches_filter(Some(&"four".into()), &"4".into()));
        assert!(rating.matches_filter(Some(&"n/a".into()), &"n/a".into()));

        let day = FieldSpec::date("scheduled");
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert!(day.matches_filter(Some(&Value::Date(date)), &"05/01/2024".into()));
        assert!(!day.matches_filter(Some(&Value::Null), &Value::Date(date)));
    }

    #[test]
    fn test_schema_require() {
        let schema: Schema = vec![FieldSpec::text("title"), FieldSpec::number("salary")]
            .into_iter()
            .collect();

        assert_eq!(schema.require("title", FieldRole::Search).unwrap().name, "title");
        assert_eq!(
            schema.require("location", FieldRole::Filter),
            Err(QueryError::UnknownField {
                field: "location".to_string(),
                role: FieldRole::Filter,
            })
        );
        assert_eq!(schema.names().collect::<Vec<_>>(), vec!["title", "salary"]);
    }

    #[test]
    fn test_field_spec_defaults_from_toml() {
        let spec: FieldSpec = toml::from_str(r#"name = "title""#).unwrap();
        assert_eq!(spec.kind, FieldKind::Text);
        assert_eq!(spec.collation, Collation::Folded);
        assert!(spec.sortable);
        assert!(spec.filterable);
    }
}
