//! Convenience re-exports for common basestation usage
//!
//! # Example
//!
//! ```rust
//! use basestation::prelude::*;
//! ```

// Core basestation components
pub use crate::core::BaseStation;
pub use crate::errors::BaseStationError;
pub use crate::migration;

// Entities and the search service
pub use crate::aircraft::{
    AircraftSearch, SEARCH_FIELDS, aircraft_table, flights_table,
};
pub use crate::lookup;

// Re-export centralized config
pub use config::{AppConfig, ConfigError, DatabaseConfig};

// Re-export commonly used record-store types for convenience
pub use record_store::prelude::*;

// Common external dependencies
pub use sqlx;
pub use tokio;
