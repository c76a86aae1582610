//! Query engine for listview screens.
//!
//! This crate provides:
//! - `QueryEngine`: search, filter, stable sort and clamped pagination
//! - `View`: the derived page a screen renders
//! - `RecordSource`: the collaborator that supplies records
//! - `ScreenRegistry`: configured screens by id
//! - `ScreenSession`: descriptor and selection state of one mounted screen

pub mod engine;
pub mod error;
pub mod registry;
pub mod session;
pub mod source;
pub mod view;

pub use engine::{paginate, Page, QueryEngine};
pub use error::{EngineError, EngineResult};
pub use registry::ScreenRegistry;
pub use session::ScreenSession;
pub use source::{JsonSource, RecordSource, StaticSource};
pub use view::View;

// Re-export listview_core types for convenience
pub use listview_core::{
    QueryDescriptor, QueryError, Record, RecordId, Row, ScreenSpec, SelectAllState, Selection,
    SelectionPolicy, SortDirection, Value,
};
