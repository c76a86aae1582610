//! Record and value types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// Stable record identifier. Never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single attribute value.
///
/// Deserialized untagged from JSON. Every string decodes as
/// [`Value::Text`] exactly as written; date fields parse their text when
/// sorting and filtering. [`Value::Date`] is only built in code and
/// serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    #[serde(skip_deserializing)]
    Date(NaiveDate),
    Text(String),
}

impl Value {
    /// Text used for substring search and for display.
    pub fn display_text(&self) -> Cow<'_, str> {
        match self {
            Value::Null => Cow::Borrowed(""),
            Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            Value::Number(n) => Cow::Owned(format_number(*n)),
            Value::Date(d) => Cow::Owned(d.format("%Y-%m-%d").to_string()),
            Value::Text(s) => Cow::Borrowed(s),
        }
    }

    /// True for null and for empty text.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

/// Integral numbers print without a fractional part so that searching
/// for "3" finds a value of 3.0.
fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

/// Anything the query engine can search, filter and sort.
///
/// [`Record`] is the dynamic implementation; screens with typed rows can
/// implement this directly.
pub trait Row {
    /// The record's stable identifier.
    fn id(&self) -> RecordId;

    /// Look up a named attribute. `None` when the record has no such field.
    fn value(&self, field: &str) -> Option<Cow<'_, Value>>;
}

/// One domain entity: an application, a job posting, an interview, a candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier.
    pub id: RecordId,

    /// Named attributes.
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl Record {
    /// Create a record with no attributes.
    pub fn new(id: u64) -> Self {
        Self {
            id: RecordId(id),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Get an attribute by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

impl Row for Record {
    fn id(&self) -> RecordId {
        self.id
    }

    fn value(&self, field: &str) -> Option<Cow<'_, Value>> {
        match self.fields.get(field) {
            Some(v) => Some(Cow::Borrowed(v)),
            // `id` is addressable like any other column
            None if field == "id" => Some(Cow::Owned(Value::Number(self.id.0 as f64))),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_display_text() {
        assert_eq!(Value::Number(3.0).display_text(), "3");
        assert_eq!(Value::Number(2.5).display_text(), "2.5");
        assert_eq!(Value::Null.display_text(), "");
        assert_eq!(Value::Bool(true).display_text(), "true");
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(Value::Date(date).display_text(), "2024-03-09");
    }

    #[test]
    fn test_value_is_blank() {
        assert!(Value::Null.is_blank());
        assert!(Value::from("").is_blank());
        assert!(!Value::from(" ").is_blank());
        assert!(!Value::from(0).is_blank());
    }

    #[test]
    fn test_record_deserializes_flat() {
        let json = r#"{"id": 7, "title": "Engineer", "salary": 120000, "posted": "2024-01-15", "remote": true, "notes": null}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, RecordId(7));
        assert_eq!(record.get("title"), Some(&Value::from("Engineer")));
        assert_eq!(record.get("salary"), Some(&Value::Number(120000.0)));
        assert_eq!(record.get("posted"), Some(&Value::from("2024-01-15")));
        assert_eq!(record.get("remote"), Some(&Value::Bool(true)));
        assert_eq!(record.get("notes"), Some(&Value::Null));
        assert!(!record.fields.contains_key("id"));
    }

    #[test]
    fn test_date_like_text_is_kept_verbatim() {
        let json = r#"[{"id": 1, "code": "2024-1-5"}, {"id": 2, "code": "+2024-01-05"}]"#;
        let records: Vec<Record> = serde_json::from_str(json).unwrap();

        assert_eq!(records[0].get("code"), Some(&Value::from("2024-1-5")));
        assert_eq!(records[1].get("code"), Some(&Value::from("+2024-01-05")));

        let back = serde_json::to_value(&records).unwrap();
        assert_eq!(
            back,
            serde_json::json!([{"id": 1, "code": "2024-1-5"}, {"id": 2, "code": "+2024-01-05"}])
        );
    }

    #[test]
    fn test_date_value_serializes_as_iso_text() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let record = Record::new(1).with("posted", date);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "posted": "2024-03-09"}));
    }

    #[test]
    fn test_record_serializes_flat() {
        let record = Record::new(1).with("title", "Engineer");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "title": "Engineer"}));
    }

    #[test]
    fn test_row_exposes_id_field() {
        let record = Record::new(42).with("title", "Engineer");
        assert_eq!(
            record.value("id").map(|v| v.into_owned()),
            Some(Value::Number(42.0))
        );
        assert!(record.value("missing").is_none());
    }
}
