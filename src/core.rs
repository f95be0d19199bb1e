//! Core BaseStation functionality
//!
//! This module contains the main [`BaseStation`] struct, which owns the
//! SQLite connection pool and hands out per-request stores and search
//! services. Every in-flight query checks its own connection out of the
//! pool, so concurrent searches never share a driver session.

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::aircraft::{self, AircraftSearch};
use crate::errors::BaseStationError;
use config::DatabaseConfig;
use record_store::{JoinKind, RecordStore, TableSpec};

/// Coordinator for one BaseStation log database.
pub struct BaseStation {
    pool: SqlitePool,
    default_limit: i64,
    join: JoinKind,
    trace_sql: bool,
}

impl BaseStation {
    /// Open the database described by `config`.
    pub async fn connect(config: DatabaseConfig) -> Result<Self, BaseStationError> {
        config.validate()?;
        let join = JoinKind::from_str(&config.join)?;

        let options = SqliteConnectOptions::new()
            .filename(&config.path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect_with(options)
            .await?;

        Ok(Self {
            pool,
            default_limit: config.default_limit,
            join,
            trace_sql: config.trace_sql,
        })
    }

    /// Open a database file with default pool and query settings.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, BaseStationError> {
        Self::connect(DatabaseConfig::for_path(path.as_ref().to_string_lossy())).await
    }

    /// Open a private in-memory database, mainly for tests and demos.
    ///
    /// The pool is pinned to a single connection; an in-memory database is
    /// visible only to the connection that created it.
    pub async fn open_in_memory() -> Result<Self, BaseStationError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        Ok(Self {
            pool,
            default_limit: config::DEFAULT_LIMIT,
            join: JoinKind::Inner,
            trace_sql: false,
        })
    }

    /// Get database pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// The join keyword used for entities with a child table.
    pub fn join(&self) -> JoinKind {
        self.join
    }

    /// Build a store over this database for an arbitrary table spec.
    pub fn store(&self, spec: TableSpec) -> RecordStore {
        RecordStore::new(self.pool.clone(), spec)
            .with_default_limit(self.default_limit)
            .with_sql_trace(self.trace_sql)
    }

    /// Store over the Aircraft table with its Flights child join.
    pub fn aircraft_store(&self) -> Result<RecordStore, BaseStationError> {
        Ok(self.store(aircraft::aircraft_table(self.join)?))
    }

    /// Store over the Flights table alone, for per-flight reads and writes.
    pub fn flights_store(&self) -> Result<RecordStore, BaseStationError> {
        Ok(self.store(aircraft::flights_table()?))
    }

    /// Search service over the aircraft log.
    pub fn aircraft_search(&self) -> Result<AircraftSearch, BaseStationError> {
        Ok(AircraftSearch::new(self.aircraft_store()?))
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), BaseStationError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
