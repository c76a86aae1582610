//! Core types for listview.
//!
//! This crate contains the data structures shared by the engine and its hosts:
//! - Records, values and the `Row` trait
//! - Field schema and comparison rules
//! - Query descriptor and its transitions
//! - Selection set
//! - Screen configuration
//! - Error types

mod config;
mod descriptor;
mod error;
mod record;
mod schema;
mod selection;

pub use config::{
    config_dir, config_path, load_config, load_user_config, AppConfig, DefaultSort, ScreenSpec,
};
pub use descriptor::{QueryDescriptor, SortDirection, DEFAULT_PAGE_SIZE};
pub use error::{ConfigError, FieldRole, QueryError, SourceError};
pub use record::{Record, RecordId, Row, Value};
pub use schema::{
    parse_date_text, Collation, FieldKind, FieldSpec, Schema, SortKey, DATETIME_FORMATS,
    DATE_FORMATS,
};
pub use selection::{SelectAllState, Selection, SelectionPolicy};
