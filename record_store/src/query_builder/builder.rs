//! Dynamic SELECT composition.

use crate::query_builder::criteria::{Comparison, Criteria};
use crate::table_spec::TableSpec;
use crate::validation::{ValidatedFieldName, ValidationError};

/// Builder for the dynamic SELECT a store executes on `find`.
///
/// Criteria values become bound parameters; column names and the join are
/// string-composed, which is why every identifier is validated before it
/// reaches the statement text.
#[derive(Debug, Clone, Default)]
pub struct SelectQuery {
    fields: Vec<String>,
    criteria: Criteria,
    limit: Option<i64>,
}

/// A composed statement and its bound values, in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltQuery {
    pub sql: String,
    pub params: Vec<String>,
}

impl SelectQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a projected column. With no fields, the query selects `*`.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(name.into());
        self
    }

    /// Add multiple projected columns.
    pub fn fields<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.fields.extend(names.into_iter().map(Into::into));
        self
    }

    /// Set the filter criteria (combined with AND).
    pub fn criteria(mut self, criteria: Criteria) -> Self {
        self.criteria = criteria;
        self
    }

    /// Override the store's default row limit for this query.
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Compose the SQL text and parameter list for `spec`.
    ///
    /// The limit is always appended: the cap is enforced by the engine, not
    /// by truncating results afterwards.
    pub fn build(&self, spec: &TableSpec, default_limit: i64) -> Result<BuiltQuery, ValidationError> {
        let mut sql = String::from("SELECT ");

        if self.fields.is_empty() {
            sql.push('*');
        } else {
            for (index, field) in self.fields.iter().enumerate() {
                if index > 0 {
                    sql.push_str(", ");
                }
                sql.push_str(ValidatedFieldName::new(field)?.as_str());
            }
        }

        sql.push_str(" FROM ");
        sql.push_str(&spec.from_clause());

        let mut params = Vec::with_capacity(self.criteria.len());
        for (index, (column, value)) in self.criteria.iter().enumerate() {
            sql.push_str(if index == 0 { " WHERE " } else { " AND " });
            sql.push_str(ValidatedFieldName::new(column)?.as_str());
            sql.push(' ');
            sql.push_str(Comparison::for_value(value).to_sql());
            sql.push_str(" ?");
            params.push(value.to_string());
        }

        sql.push_str(&format!(" LIMIT {}", self.limit.unwrap_or(default_limit)));

        Ok(BuiltQuery { sql, params })
    }
}
