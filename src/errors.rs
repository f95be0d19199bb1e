//! Error types for the basestation crate
//!
//! This module contains the workspace-level error type returned by the
//! coordinator and the search service. Store failures are re-wrapped here
//! with their original message preserved for display.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BaseStationError {
    #[error("Database connection error: {0}")]
    Connection(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid identifier: {0}")]
    Validation(#[from] record_store::ValidationError),

    #[error(transparent)]
    DataAccess(#[from] record_store::DataAccessError),
}
