//! Dynamically typed result rows.
//!
//! Result schemas are determined by the query, not known at compile time, so
//! rows come back as ordered sequences of [`SqlValue`] mirroring SQLite's
//! storage classes. Row order is whatever the engine returns: no `ORDER BY`
//! is emitted anywhere in this crate, and order is not stable across calls.

use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row as _, TypeInfo as _, ValueRef as _};
use std::fmt;

/// One result row: the selected column values in projection order.
pub type Row = Vec<SqlValue>;

/// A single column value read from a query result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl SqlValue {
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// The text content, when this value is `Text`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SqlValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            SqlValue::Integer(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<String> for SqlValue {
    fn from(val: String) -> Self {
        SqlValue::Text(val)
    }
}

impl From<&str> for SqlValue {
    fn from(val: &str) -> Self {
        SqlValue::Text(val.to_string())
    }
}

impl From<i64> for SqlValue {
    fn from(val: i64) -> Self {
        SqlValue::Integer(val)
    }
}

impl From<f64> for SqlValue {
    fn from(val: f64) -> Self {
        SqlValue::Real(val)
    }
}

impl From<bool> for SqlValue {
    fn from(val: bool) -> Self {
        SqlValue::Integer(val as i64)
    }
}

impl<T> From<Option<T>> for SqlValue
where
    T: Into<SqlValue>,
{
    fn from(val: Option<T>) -> Self {
        match val {
            Some(v) => v.into(),
            None => SqlValue::Null,
        }
    }
}

/// Display renders values the way a results grid shows them: NULL as an
/// empty cell, blobs as hex.
impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => Ok(()),
            SqlValue::Integer(value) => write!(f, "{}", value),
            SqlValue::Real(value) => write!(f, "{}", value),
            SqlValue::Text(text) => f.write_str(text),
            SqlValue::Blob(bytes) => {
                for byte in bytes {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
        }
    }
}

impl From<SqlValue> for serde_json::Value {
    fn from(val: SqlValue) -> Self {
        match val {
            SqlValue::Null => serde_json::Value::Null,
            SqlValue::Integer(value) => serde_json::Value::from(value),
            SqlValue::Real(value) => serde_json::Number::from_f64(value)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            SqlValue::Text(text) => serde_json::Value::String(text),
            SqlValue::Blob(_) => serde_json::Value::String(val.to_string()),
        }
    }
}

/// Convert a row to a JSON array, for export or grid rendering.
pub fn row_to_json(row: &Row) -> serde_json::Value {
    serde_json::Value::Array(row.iter().cloned().map(serde_json::Value::from).collect())
}

/// Decode every column of a driver row by its runtime storage class.
pub(crate) fn decode_row(row: &SqliteRow) -> Result<Row, sqlx::Error> {
    let mut values = Vec::with_capacity(row.len());
    for index in 0..row.len() {
        let raw = row.try_get_raw(index)?;
        let value = if raw.is_null() {
            SqlValue::Null
        } else {
            match raw.type_info().name() {
                "INTEGER" | "BOOLEAN" => SqlValue::Integer(row.try_get(index)?),
                "REAL" => SqlValue::Real(row.try_get(index)?),
                "BLOB" => SqlValue::Blob(row.try_get(index)?),
                _ => SqlValue::Text(row.try_get(index)?),
            }
        };
        values.push(value);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_renders_grid_cells() {
        assert_eq!(SqlValue::Text("BAW123".to_string()).to_string(), "BAW123");
        assert_eq!(SqlValue::Integer(7312).to_string(), "7312");
        assert_eq!(SqlValue::Null.to_string(), "");
        assert_eq!(SqlValue::Blob(vec![0xde, 0xad]).to_string(), "dead");
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(SqlValue::from("G-EUPT"), SqlValue::Text("G-EUPT".to_string()));
        assert_eq!(SqlValue::from(1i64), SqlValue::Integer(1));
        assert_eq!(SqlValue::from(true), SqlValue::Integer(1));
        assert_eq!(SqlValue::from(None::<i64>), SqlValue::Null);
    }

    #[test]
    fn test_row_to_json() {
        let row = vec![
            SqlValue::Text("BAW123".to_string()),
            SqlValue::Integer(7312),
            SqlValue::Null,
        ];

        let json = row_to_json(&row);
        assert_eq!(json, serde_json::json!(["BAW123", 7312, null]));
    }
}
