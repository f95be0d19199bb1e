//! SQL composition tests for the query builder.

use crate::query_builder::{Criteria, JoinKind, SelectQuery};
use crate::table_spec::TableSpec;

fn aircraft_spec() -> TableSpec {
    TableSpec::new("Aircraft", "AircraftID")
        .unwrap()
        .with_child("Flights", "AircraftID", JoinKind::Inner)
        .unwrap()
}

#[test]
fn test_select_star_without_criteria() {
    let spec = TableSpec::new("Aircraft", "AircraftID").unwrap();
    let built = SelectQuery::new().build(&spec, 500).unwrap();

    assert_eq!(built.sql, "SELECT * FROM Aircraft LIMIT 500");
    assert!(built.params.is_empty());
}

#[test]
fn test_projection_keeps_field_order() {
    let spec = TableSpec::new("Aircraft", "AircraftID").unwrap();
    let built = SelectQuery::new()
        .fields(["ModeS", "Registration"])
        .build(&spec, 500)
        .unwrap();

    assert_eq!(built.sql, "SELECT ModeS, Registration FROM Aircraft LIMIT 500");
}

#[test]
fn test_join_clause_for_configured_child() {
    let built = SelectQuery::new()
        .field("Callsign")
        .build(&aircraft_spec(), 500)
        .unwrap();

    assert_eq!(
        built.sql,
        "SELECT Callsign FROM Aircraft INNER JOIN Flights \
         ON Aircraft.AircraftID = Flights.AircraftID LIMIT 500"
    );
}

#[test]
fn test_wildcard_value_uses_like() {
    let built = SelectQuery::new()
        .criteria(Criteria::new().with("Callsign", "BAW%"))
        .build(&aircraft_spec(), 500)
        .unwrap();

    assert!(built.sql.contains("WHERE Callsign LIKE ?"));
    assert_eq!(built.params, vec!["BAW%".to_string()]);
}

#[test]
fn test_plain_value_uses_equality() {
    let built = SelectQuery::new()
        .criteria(Criteria::new().with("Callsign", "BAW123"))
        .build(&aircraft_spec(), 500)
        .unwrap();

    assert!(built.sql.contains("WHERE Callsign = ?"));
    assert_eq!(built.params, vec!["BAW123".to_string()]);
}

#[test]
fn test_multiple_criteria_joined_with_and() {
    let built = SelectQuery::new()
        .criteria(
            Criteria::new()
                .with("Callsign", "BAW%")
                .with("Registration", "G-EUPT")
                .with("HadAlert", "1"),
        )
        .build(&aircraft_spec(), 500)
        .unwrap();

    assert!(built
        .sql
        .contains("WHERE Callsign LIKE ? AND Registration = ? AND HadAlert = ?"));
    assert_eq!(
        built.params,
        vec!["BAW%".to_string(), "G-EUPT".to_string(), "1".to_string()]
    );
}

#[test]
fn test_underscore_value_uses_like() {
    let built = SelectQuery::new()
        .criteria(Criteria::new().with("FirstSquawk", "7_00"))
        .build(&aircraft_spec(), 500)
        .unwrap();

    assert!(built.sql.contains("FirstSquawk LIKE ?"));
}

#[test]
fn test_limit_always_appended() {
    let spec = TableSpec::new("Aircraft", "AircraftID").unwrap();

    let default = SelectQuery::new().build(&spec, 250).unwrap();
    assert!(default.sql.ends_with("LIMIT 250"));

    let overridden = SelectQuery::new().limit(10).build(&spec, 250).unwrap();
    assert!(overridden.sql.ends_with("LIMIT 10"));
}

#[test]
fn test_rejects_invalid_projection_column() {
    let result = SelectQuery::new()
        .field("Callsign; DROP TABLE Flights")
        .build(&aircraft_spec(), 500);

    assert!(result.is_err());
}

#[test]
fn test_rejects_invalid_criteria_column() {
    let result = SelectQuery::new()
        .criteria(Criteria::new().with("Callsign = '' OR 1=1 --", "x"))
        .build(&aircraft_spec(), 500);

    assert!(result.is_err());
}

#[test]
fn test_values_never_reach_statement_text() {
    // Hostile values ride in the parameter list, not the SQL.
    let hostile = "'; DROP TABLE Aircraft; --";
    let built = SelectQuery::new()
        .criteria(Criteria::new().with("Callsign", hostile))
        .build(&aircraft_spec(), 500)
        .unwrap();

    assert!(!built.sql.contains("DROP TABLE"));
    assert_eq!(built.params, vec![hostile.to_string()]);
}
