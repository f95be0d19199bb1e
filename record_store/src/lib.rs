//! Record Store - Core data-access layer for basestation
//!
//! This crate provides the foundational types for querying aircraft-tracking
//! SQLite databases: a generic per-table store, a dynamic query builder with
//! a wildcard/LIKE heuristic, identifier validation, and dynamically typed
//! result rows.

pub mod errors;
pub mod prelude;
pub mod query_builder;
pub mod row;
pub mod store;
pub mod table_spec;
pub mod validation;

pub use errors::DataAccessError;
pub use query_builder::{Comparison, Criteria, JoinKind, SelectQuery};
pub use row::{Row, SqlValue};
pub use store::RecordStore;
pub use table_spec::{ChildJoin, TableSpec};
pub use validation::{ValidatedFieldName, ValidatedTableName, ValidationError};

use sqlx::SqlitePool;

pub type DbPool = SqlitePool;
