//! Database schema creation
//!
//! This module creates the minimal BaseStation tables when pointed at a
//! fresh file, so the library can start a new log database as well as search
//! an existing one. Existing tables are left untouched.

use crate::core::BaseStation;
use crate::errors::BaseStationError;

const CREATE_AIRCRAFT_SQL: &str = "CREATE TABLE IF NOT EXISTS Aircraft (
    AircraftID INTEGER PRIMARY KEY AUTOINCREMENT,
    FirstCreated TEXT,
    LastModified TEXT,
    ModeS TEXT NOT NULL,
    ModeSCountry TEXT,
    Registration TEXT,
    ICAOTypeCode TEXT,
    OperatorFlagCode TEXT
)";

const CREATE_FLIGHTS_SQL: &str = "CREATE TABLE IF NOT EXISTS Flights (
    FlightID INTEGER PRIMARY KEY AUTOINCREMENT,
    AircraftID INTEGER NOT NULL REFERENCES Aircraft(AircraftID),
    StartTime TEXT,
    EndTime TEXT,
    Callsign TEXT,
    FirstSquawk INTEGER,
    HadAlert INTEGER NOT NULL DEFAULT 0,
    HadEmergency INTEGER NOT NULL DEFAULT 0,
    HadSPI INTEGER NOT NULL DEFAULT 0
)";

const CREATE_INDEXES_SQL: &[&str] = &[
    "CREATE UNIQUE INDEX IF NOT EXISTS AircraftModeSIdx ON Aircraft(ModeS)",
    "CREATE INDEX IF NOT EXISTS FlightsAircraftIdx ON Flights(AircraftID)",
    "CREATE INDEX IF NOT EXISTS FlightsCallsignIdx ON Flights(Callsign)",
];

impl BaseStation {
    /// Create the Aircraft and Flights tables and their indexes if absent.
    pub async fn ensure_schema(&self) -> Result<(), BaseStationError> {
        sqlx::query(CREATE_AIRCRAFT_SQL).execute(self.pool()).await?;
        sqlx::query(CREATE_FLIGHTS_SQL).execute(self.pool()).await?;

        for index_sql in CREATE_INDEXES_SQL {
            sqlx::query(index_sql).execute(self.pool()).await?;
        }

        Ok(())
    }
}
