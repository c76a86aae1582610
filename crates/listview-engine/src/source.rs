//! Record sources.
//!
//! A screen gets its records from a collaborator: today a hardcoded mock
//! array, later an API client. The engine only sees the loaded `Vec<Record>`.

use std::io::Read;

use listview_core::{Record, SourceError};

/// Supplies the record collection for a screen.
#[cfg_attr(test, mockall::automock)]
pub trait RecordSource {
    /// Name used in logs and errors.
    fn name(&self) -> String;

    /// Load the full collection.
    fn load(&self) -> Result<Vec<Record>, SourceError>;
}

/// In-memory source over a fixed list.
#[derive(Debug, Clone)]
pub struct StaticSource {
    name: String,
    records: Vec<Record>,
}

impl StaticSource {
    pub fn new(name: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }
}

impl RecordSource for StaticSource {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn load(&self) -> Result<Vec<Record>, SourceError> {
        Ok(self.records.clone())
    }
}

/// Source decoding a JSON array of flat records.
///
/// ```json
/// [{"id": 1, "title": "Engineer", "posted": "2024-03-01"}]
/// ```
#[derive(Debug, Clone)]
pub struct JsonSource {
    name: String,
    text: String,
}

impl JsonSource {
    /// Wrap JSON text. Decoding happens on `load`.
    pub fn from_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Read JSON text from a reader.
    pub fn from_reader(name: impl Into<String>, mut reader: impl Read) -> Result<Self, SourceError> {
        let name = name.into();
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| SourceError::Unavailable {
                source_name: name.clone(),
                message: e.to_string(),
            })?;
        Ok(Self { name, text })
    }
}

impl RecordSource for JsonSource {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn load(&self) -> Result<Vec<Record>, SourceError> {
        let records: Vec<Record> = serde_json::from_str(&self.text)
            .map_err(|e| SourceError::Decode(format!("{}: {}", self.name, e)))?;
        tracing::debug!("Decoded {} records from {}", records.len(), self.name);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use listview_core::{RecordId, Value};

    #[test]
    fn test_static_source_returns_records() {
        let source = StaticSource::new("jobs", vec![Record::new(1), Record::new(2)]);
        let records = source.load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(source.name(), "jobs");
    }

    #[test]
    fn test_json_source_decodes() {
        let source = JsonSource::from_text(
            "inline",
            r#"[{"id": 3, "title": "Engineer"}, {"id": 4, "title": "Manager", "rating": 4.5}]"#,
        );
        let records = source.load().unwrap();
        assert_eq!(records[0].id, RecordId(3));
        assert_eq!(records[1].get("rating"), Some(&Value::Number(4.5)));
    }

    #[test]
    fn test_json_source_from_reader() {
        let bytes: &[u8] = br#"[{"id": 1}]"#;
        let source = JsonSource::from_reader("bytes", bytes).unwrap();
        assert_eq!(source.load().unwrap().len(), 1);
    }

    #[test]
    fn test_json_source_decode_error() {
        let source = JsonSource::from_text("broken", r#"[{"title": "no id"}]"#);
        let err = source.load().unwrap_err();
        assert!(matches!(err, SourceError::Decode(msg) if msg.starts_with("broken")));
    }
}
