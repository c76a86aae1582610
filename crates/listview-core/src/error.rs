//! Error types for listview.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which part of a query referenced a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    Search,
    Sort,
    Filter,
}

impl fmt::Display for FieldRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldRole::Search => "search",
            FieldRole::Sort => "sort",
            FieldRole::Filter => "filter",
        };
        f.write_str(name)
    }
}

/// Contract violations - a screen is misconfigured.
///
/// These never originate from user-typed values; search text and filter
/// values are always treated as data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Page size must be at least one.
    #[error("Invalid page size: {0}")]
    InvalidPageSize(usize),

    /// A field name that the screen schema does not declare.
    #[error("Unknown {role} field '{field}'")]
    UnknownField { field: String, role: FieldRole },

    /// The field exists but is not declared sortable.
    #[error("Field '{0}' is not sortable")]
    NotSortable(String),

    /// The field exists but is not declared filterable.
    #[error("Field '{0}' is not filterable")]
    NotFilterable(String),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("IO error reading {path:?}: {message}")]
    Io { path: PathBuf, message: String },

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A screen definition failed validation.
    #[error("Invalid screen '{screen}': {message}")]
    InvalidScreen { screen: String, message: String },

    /// Two screens share an id.
    #[error("Screen '{0}' already exists")]
    DuplicateScreen(String),
}

/// Record source errors - surfaced to the host screen.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source could not produce records.
    #[error("Source '{source_name}' unavailable: {message}")]
    Unavailable {
        source_name: String,
        message: String,
    },

    /// Records could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),
}
