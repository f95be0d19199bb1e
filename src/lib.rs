//! # BaseStation
//!
//! A Rust data-access library for BaseStation-format aircraft-tracking SQLite
//! databases: dynamic search criteria with a wildcard/LIKE heuristic,
//! child-table joins, bound parameters throughout, and a hard row limit on
//! every query.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use basestation::prelude::*;
//! use std::collections::HashMap;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let station = BaseStation::open("BaseStation.sqb").await?;
//!     station.health_check().await?;
//!
//!     let search = station.aircraft_search()?;
//!
//!     let mut criteria = HashMap::new();
//!     criteria.insert("Callsign".to_string(), "BAW%".to_string());
//!
//!     for row in search.search(&criteria).await? {
//!         let cells: Vec<String> = row.iter().map(|value| value.to_string()).collect();
//!         println!("{}", cells.join(" | "));
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod aircraft;
pub mod core;
pub mod errors;
pub mod lookup;
pub mod migration;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::BaseStation;
pub use aircraft::AircraftSearch;
pub use errors::BaseStationError;

// Re-export centralized config
pub use config::{AppConfig, ConfigError, DatabaseConfig};

// Re-export the data-access layer
pub use record_store;

// Re-export external dependencies used in public API
pub use sqlx;
