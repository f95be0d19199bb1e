//! Aircraft log entities and the search service.
//!
//! The entity definitions fix the table wiring the generic store needs:
//! `Aircraft` keyed by `AircraftID`, with the one-to-many `Flights` child
//! table joined on the same key. [`AircraftSearch`] is the domain facade a
//! UI talks to: it takes a raw field→value map straight from a search form
//! and turns it into a bounded store query.

use std::collections::HashMap;

use crate::errors::BaseStationError;
use record_store::{Criteria, JoinKind, RecordStore, Row, SelectQuery, TableSpec, ValidationError};

pub const AIRCRAFT_TABLE: &str = "Aircraft";
pub const AIRCRAFT_PRIMARY_KEY: &str = "AircraftID";
pub const FLIGHTS_TABLE: &str = "Flights";
pub const FLIGHTS_PRIMARY_KEY: &str = "FlightID";

/// Columns a caller may search on, in the order they are presented to a
/// user. This doubles as the projection of every search result row.
/// Anything not listed here is ignored, never filtered on.
pub const SEARCH_FIELDS: &[&str] = &[
    "StartTime",
    "FirstSquawk",
    "Callsign",
    "HadAlert",
    "HadEmergency",
    "HadSPI",
    "ModeS",
    "Registration",
    "ICAOTypeCode",
    "OperatorFlagCode",
    "ModeSCountry",
];

/// The Aircraft table with its Flights child join.
pub fn aircraft_table(join: JoinKind) -> Result<TableSpec, ValidationError> {
    TableSpec::new(AIRCRAFT_TABLE, AIRCRAFT_PRIMARY_KEY)?.with_child(
        FLIGHTS_TABLE,
        AIRCRAFT_PRIMARY_KEY,
        join,
    )
}

/// The Flights table alone.
pub fn flights_table() -> Result<TableSpec, ValidationError> {
    TableSpec::new(FLIGHTS_TABLE, FLIGHTS_PRIMARY_KEY)
}

/// Domain search facade over an aircraft store.
#[derive(Debug, Clone)]
pub struct AircraftSearch {
    store: RecordStore,
}

impl AircraftSearch {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Search the log for the given raw criteria.
    ///
    /// Empty values are dropped and unrecognized fields ignored, so a map of
    /// blank form inputs behaves exactly like no filter at all: up to the
    /// store's row limit, unordered. Field names are matched
    /// case-insensitively; the composed SQL uses the canonical casing.
    pub async fn search(
        &self,
        raw: &HashMap<String, String>,
    ) -> Result<Vec<Row>, BaseStationError> {
        let mut criteria = Criteria::new();
        for field in SEARCH_FIELDS {
            let value = raw
                .iter()
                .find_map(|(key, value)| key.eq_ignore_ascii_case(field).then_some(value));
            match value {
                Some(value) if !value.is_empty() => criteria.push(*field, value.as_str()),
                _ => {}
            }
        }

        let query = SelectQuery::new()
            .fields(SEARCH_FIELDS.iter().copied())
            .criteria(criteria);

        Ok(self.store.find(query).await?)
    }
}
