//! Screen configuration.
//!
//! Each list screen is described declaratively: its fields, which of them
//! are searched, the page size, an optional default sort, and the selection
//! policy. Screens ship with built-in defaults; users may override them in
//! `screens.toml` under the config directory:
//!
//! ```toml
//! [[screens]]
//! id = "applications"
//! title = "Applications"
//! page_size = 10
//! search_fields = ["candidate", "job_title"]
//!
//! [[screens.fields]]
//! name = "applied_on"
//! kind = "date"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::descriptor::{QueryDescriptor, SortDirection, DEFAULT_PAGE_SIZE};
use crate::error::ConfigError;
use crate::schema::Schema;
use crate::selection::SelectionPolicy;

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub screens: Vec<ScreenSpec>,
}

impl AppConfig {
    /// Validate every screen and reject duplicate ids.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for screen in &self.screens {
            if !seen.insert(screen.id.as_str()) {
                return Err(ConfigError::DuplicateScreen(screen.id.clone()));
            }
            screen.validate()?;
        }
        Ok(())
    }

    /// Find a screen by id.
    pub fn screen(&self, id: &str) -> Option<&ScreenSpec> {
        self.screens.iter().find(|s| s.id == id)
    }
}

/// Sort applied when a screen first mounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DefaultSort {
    pub field: String,
    #[serde(default = "ascending")]
    pub direction: SortDirection,
}

fn ascending() -> SortDirection {
    SortDirection::Ascending
}

/// Declarative description of one list screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScreenSpec {
    /// Stable screen identifier, e.g. "applications".
    pub id: String,

    /// Heading shown above the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Fields the screen knows about.
    #[serde(default)]
    pub fields: Schema,

    /// Fields checked by the search box.
    #[serde(default)]
    pub search_fields: Vec<String>,

    /// Rows per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sort: Option<DefaultSort>,

    #[serde(default)]
    pub selection_policy: SelectionPolicy,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl ScreenSpec {
    /// Create a screen with the given fields and default settings.
    pub fn new(id: impl Into<String>, fields: Schema) -> Self {
        Self {
            id: id.into(),
            title: None,
            fields,
            search_fields: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
            default_sort: None,
            selection_policy: SelectionPolicy::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_search_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_default_sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.default_sort = Some(DefaultSort {
            field: field.into(),
            direction,
        });
        self
    }

    pub fn with_selection_policy(mut self, policy: SelectionPolicy) -> Self {
        self.selection_policy = policy;
        self
    }

    /// The screen's field schema.
    pub fn schema(&self) -> &Schema {
        &self.fields
    }

    /// Descriptor a freshly mounted screen starts from.
    pub fn initial_descriptor(&self) -> QueryDescriptor {
        let descriptor = QueryDescriptor::new(self.search_fields.iter().cloned(), self.page_size);
        match &self.default_sort {
            Some(sort) => descriptor.with_sort(Some(&sort.field), sort.direction),
            None => descriptor,
        }
    }

    /// Check the screen is internally consistent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidScreen {
            screen: self.id.clone(),
            message,
        };

        if self.page_size == 0 {
            return Err(invalid("page_size must be at least 1".to_string()));
        }

        let mut names = HashSet::new();
        for name in self.fields.names() {
            if !names.insert(name) {
                return Err(invalid(format!("duplicate field '{}'", name)));
            }
        }

        for field in &self.search_fields {
            if self.fields.get(field).is_none() {
                return Err(invalid(format!("unknown search field '{}'", field)));
            }
        }

        if let Some(sort) = &self.default_sort {
            match self.fields.get(&sort.field) {
                None => return Err(invalid(format!("unknown sort field '{}'", sort.field))),
                Some(spec) if !spec.sortable => {
                    return Err(invalid(format!("field '{}' is not sortable", sort.field)))
                }
                Some(_) => {}
            }
        }

        Ok(())
    }
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("listview"))
}

/// Get the path to screens.toml.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("screens.toml"))
}

/// Load and validate a configuration file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let config: AppConfig = toml::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Load the user's screens.toml.
///
/// Returns `Ok(None)` when the file doesn't exist.
pub fn load_user_config() -> Result<Option<AppConfig>, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;
    if !path.exists() {
        return Ok(None);
    }
    load_config(&path).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldSpec;
    use std::io::Write;

    fn jobs_screen() -> ScreenSpec {
        ScreenSpec::new(
            "jobs",
            Schema::new(vec![
                FieldSpec::text("title"),
                FieldSpec::text("company"),
                FieldSpec::date("posted").not_filterable(),
            ]),
        )
        .with_search_fields(["title", "company"])
    }

    #[test]
    fn test_initial_descriptor() {
        let screen = jobs_screen()
            .with_page_size(5)
            .with_default_sort("posted", SortDirection::Descending);
        let d = screen.initial_descriptor();

        assert_eq!(d.search_fields, vec!["title", "company"]);
        assert_eq!(d.page_size, 5);
        assert_eq!(d.page, 1);
        assert_eq!(d.sort_field.as_deref(), Some("posted"));
        assert_eq!(d.sort_direction, SortDirection::Descending);
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let err = jobs_screen().with_page_size(0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidScreen { .. }));
    }

    #[test]
    fn test_validate_rejects_unknown_search_field() {
        let screen = jobs_screen().with_search_fields(["title", "salary"]);
        let err = screen.validate().unwrap_err();
        assert!(err.to_string().contains("salary"));
    }

    #[test]
    fn test_validate_rejects_unsortable_default_sort() {
        let mut screen = jobs_screen();
        screen.fields = Schema::new(vec![FieldSpec::text("title").not_sortable()]);
        screen.search_fields.clear();
        let screen = screen.with_default_sort("title", SortDirection::Ascending);
        assert!(screen.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_fields() {
        let screen = ScreenSpec::new(
            "dup",
            Schema::new(vec![FieldSpec::text("title"), FieldSpec::number("title")]),
        );
        assert!(screen.validate().is_err());
    }

    #[test]
    fn test_load_config_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[[screens]]
id = "interviews"
title = "Interviews"
page_size = 5
search_fields = ["candidate"]
selection_policy = "clear_on_query_change"
default_sort = {{ field = "scheduled", direction = "descending" }}

[[screens.fields]]
name = "candidate"

[[screens.fields]]
name = "scheduled"
kind = "date"
filterable = false
"#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        let screen = config.screen("interviews").unwrap();
        assert_eq!(screen.title.as_deref(), Some("Interviews"));
        assert_eq!(screen.page_size, 5);
        assert_eq!(screen.selection_policy, SelectionPolicy::ClearOnQueryChange);
        assert_eq!(screen.fields.len(), 2);
        assert!(!screen.fields.get("scheduled").unwrap().filterable);
        assert_eq!(
            screen.default_sort,
            Some(DefaultSort {
                field: "scheduled".to_string(),
                direction: SortDirection::Descending,
            })
        );
    }

    #[test]
    fn test_load_config_rejects_duplicate_screens() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[[screens]]
id = "jobs"

[[screens]]
id = "jobs"
"#
        )
        .unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateScreen(id) if id == "jobs"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("screens.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_config_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[[screens]]\nid = ").unwrap();
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
