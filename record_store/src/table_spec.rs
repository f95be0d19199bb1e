//! Table configuration for a record store.
//!
//! A [`TableSpec`] is a small value object carrying everything a store needs
//! to know about its table: the table name, the primary key column, and an
//! optional child table joined on a primary-key/foreign-key pair. Entity
//! definitions are factory functions producing one of these.

use crate::query_builder::JoinKind;
use crate::validation::{ValidatedFieldName, ValidatedTableName, ValidationError};

/// Describes the table a [`crate::RecordStore`] is bound to.
///
/// All identifiers are validated at construction, so a `TableSpec` only ever
/// holds names that are safe to splice into SQL text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    table: ValidatedTableName,
    primary_key: ValidatedFieldName,
    child: Option<ChildJoin>,
}

/// A child table joined into every `find` on the parent spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildJoin {
    table: ValidatedTableName,
    foreign_key: ValidatedFieldName,
    kind: JoinKind,
}

impl TableSpec {
    /// Create a spec for a standalone table.
    pub fn new(table: &str, primary_key: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            table: ValidatedTableName::new(table)?,
            primary_key: ValidatedFieldName::new(primary_key)?,
            child: None,
        })
    }

    /// Attach a child table, joined as `parent.primary_key = child.foreign_key`.
    pub fn with_child(
        mut self,
        table: &str,
        foreign_key: &str,
        kind: JoinKind,
    ) -> Result<Self, ValidationError> {
        self.child = Some(ChildJoin {
            table: ValidatedTableName::new(table)?,
            foreign_key: ValidatedFieldName::new(foreign_key)?,
            kind,
        });
        Ok(self)
    }

    pub fn table(&self) -> &str {
        self.table.as_str()
    }

    pub fn primary_key(&self) -> &str {
        self.primary_key.as_str()
    }

    pub fn child(&self) -> Option<&ChildJoin> {
        self.child.as_ref()
    }

    /// The FROM clause for this spec, including the configured join when a
    /// child table is present.
    pub fn from_clause(&self) -> String {
        match &self.child {
            Some(child) => format!(
                "{} {} {} ON {}.{} = {}.{}",
                self.table,
                child.kind.to_sql(),
                child.table,
                self.table,
                self.primary_key,
                child.table,
                child.foreign_key
            ),
            None => self.table.to_string(),
        }
    }
}

impl ChildJoin {
    pub fn table(&self) -> &str {
        self.table.as_str()
    }

    pub fn foreign_key(&self) -> &str {
        self.foreign_key.as_str()
    }

    pub fn kind(&self) -> JoinKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_clause_without_child() {
        let spec = TableSpec::new("Aircraft", "AircraftID").unwrap();
        assert_eq!(spec.from_clause(), "Aircraft");
        assert!(spec.child().is_none());
    }

    #[test]
    fn test_from_clause_with_child() {
        let spec = TableSpec::new("Aircraft", "AircraftID")
            .unwrap()
            .with_child("Flights", "AircraftID", JoinKind::Inner)
            .unwrap();

        assert_eq!(
            spec.from_clause(),
            "Aircraft INNER JOIN Flights ON Aircraft.AircraftID = Flights.AircraftID"
        );
    }

    #[test]
    fn test_left_join_keyword() {
        let spec = TableSpec::new("Aircraft", "AircraftID")
            .unwrap()
            .with_child("Flights", "AircraftID", JoinKind::Left)
            .unwrap();

        assert!(spec.from_clause().contains("LEFT JOIN Flights"));
    }

    #[test]
    fn test_rejects_invalid_identifiers() {
        assert!(TableSpec::new("Aircraft; --", "AircraftID").is_err());
        assert!(TableSpec::new("Aircraft", "id or 1=1").is_err());

        let spec = TableSpec::new("Aircraft", "AircraftID").unwrap();
        assert!(spec.with_child("Flights", "DROP", JoinKind::Inner).is_err());
    }
}
