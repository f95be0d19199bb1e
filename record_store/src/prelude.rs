//! Convenience re-exports for common record-store usage

// Error types
pub use crate::errors::DataAccessError;

// Core store functionality
pub use crate::store::RecordStore;

// Table configuration
pub use crate::table_spec::{ChildJoin, TableSpec};

// Query building
pub use crate::query_builder::{Comparison, Criteria, JoinKind, SelectQuery};

// Result rows
pub use crate::row::{row_to_json, Row, SqlValue};

// Validation
pub use crate::validation::{ValidatedFieldName, ValidatedTableName, ValidationError};

// Common external dependencies that are frequently used
pub use sqlx::SqlitePool;
