//! Generic record store.
//!
//! A [`RecordStore`] binds a connection pool to one [`TableSpec`] and exposes
//! the read/write/delete/find operations every entity shares. Each call
//! checks a connection out of the pool for itself, so concurrent searches
//! never share a driver session.

use sqlx::SqlitePool;

use crate::errors::DataAccessError;
use crate::query_builder::SelectQuery;
use crate::row::{decode_row, Row};
use crate::table_spec::TableSpec;
use crate::validation::ValidatedFieldName;

const DEFAULT_LIMIT: i64 = 500;

/// Generic per-table data access over a SQLite database.
#[derive(Debug, Clone)]
pub struct RecordStore {
    pool: SqlitePool,
    spec: TableSpec,
    default_limit: i64,
    trace_sql: bool,
}

impl RecordStore {
    pub fn new(pool: SqlitePool, spec: TableSpec) -> Self {
        Self {
            pool,
            spec,
            default_limit: DEFAULT_LIMIT,
            trace_sql: false,
        }
    }

    /// Set the row cap used when a query does not carry its own limit.
    pub fn with_default_limit(mut self, limit: i64) -> Self {
        self.default_limit = limit;
        self
    }

    /// Log every composed statement before execution.
    pub fn with_sql_trace(mut self, enabled: bool) -> Self {
        self.trace_sql = enabled;
        self
    }

    pub fn spec(&self) -> &TableSpec {
        &self.spec
    }

    pub fn default_limit(&self) -> i64 {
        self.default_limit
    }

    fn trace(&self, sql: &str) {
        if self.trace_sql {
            tracing::debug!("[{}] SQL: {}", self.spec.table(), sql);
        }
    }

    /// Fetch the single row whose primary key equals `id`.
    ///
    /// A missing row is `Ok(None)`, not an error.
    pub async fn read(&self, id: i64) -> Result<Option<Row>, DataAccessError> {
        let sql = format!(
            "SELECT * FROM {} WHERE {} = ?",
            self.spec.table(),
            self.spec.primary_key()
        );
        self.trace(&sql);

        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref()
            .map(decode_row)
            .transpose()
            .map_err(DataAccessError::from)
    }

    /// Insert a new row and return the primary key the engine assigned.
    ///
    /// The primary key column is always supplied as NULL; every other value
    /// is a bound parameter. The insert commits immediately.
    pub async fn write<'a, I>(&self, fields: I) -> Result<i64, DataAccessError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut columns = vec![self.spec.primary_key().to_string()];
        let mut values = Vec::new();
        for (column, value) in fields {
            columns.push(ValidatedFieldName::new(column)?.into_string());
            values.push(value);
        }
        if values.is_empty() {
            return Err(DataAccessError::new("write requires at least one column"));
        }

        let mut placeholders = vec!["NULL"];
        placeholders.extend(std::iter::repeat("?").take(values.len()));
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.spec.table(),
            columns.join(", "),
            placeholders.join(", ")
        );
        self.trace(&sql);

        let mut query = sqlx::query(&sql);
        for value in &values {
            query = query.bind(*value);
        }
        let result = query.execute(&self.pool).await?;
        Ok(result.last_insert_rowid())
    }

    /// Delete the row matching primary key `id`; reports whether a row was
    /// removed. The delete commits immediately.
    pub async fn delete(&self, id: i64) -> Result<bool, DataAccessError> {
        let sql = format!(
            "DELETE FROM {} WHERE {} = ?",
            self.spec.table(),
            self.spec.primary_key()
        );
        self.trace(&sql);

        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Run a dynamic SELECT against this store's table and configured join.
    ///
    /// Returns every matching row up to the limit, in whatever order the
    /// engine produces. Dropping the returned future only stops waiting for
    /// a result; the statement may still complete engine-side.
    pub async fn find(&self, query: SelectQuery) -> Result<Vec<Row>, DataAccessError> {
        let built = query.build(&self.spec, self.default_limit)?;
        self.trace(&built.sql);

        let mut sqlx_query = sqlx::query(&built.sql);
        for param in &built.params {
            sqlx_query = sqlx_query.bind(param.as_str());
        }

        let rows = sqlx_query.fetch_all(&self.pool).await?;
        rows.iter()
            .map(decode_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(DataAccessError::from)
    }

    /// Execute a statement verbatim and return its rows.
    ///
    /// For trusted, internally constructed statements only - nothing here is
    /// validated or bound.
    pub async fn raw_query(&self, statement: &str) -> Result<Vec<Row>, DataAccessError> {
        self.trace(statement);

        let rows = sqlx::query(statement).fetch_all(&self.pool).await?;
        rows.iter()
            .map(decode_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(DataAccessError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query_builder::Criteria;
    use crate::row::SqlValue;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::query(
            "CREATE TABLE Sessions (
                SessionID INTEGER PRIMARY KEY AUTOINCREMENT,
                Callsign TEXT,
                Squawk INTEGER,
                Notes TEXT
            )",
        )
        .execute(&pool)
        .await
        .unwrap();
        pool
    }

    fn store(pool: SqlitePool) -> RecordStore {
        RecordStore::new(pool, TableSpec::new("Sessions", "SessionID").unwrap())
    }

    #[tokio::test]
    async fn test_write_then_read_round_trip() {
        let store = store(pool().await);

        let id = store
            .write([("Callsign", "BAW123"), ("Notes", "heathrow departure")])
            .await
            .unwrap();

        let row = store.read(id).await.unwrap().expect("row should exist");
        assert_eq!(row[0], SqlValue::Integer(id));
        assert_eq!(row[1], SqlValue::Text("BAW123".to_string()));
        assert_eq!(row[3], SqlValue::Text("heathrow departure".to_string()));
    }

    #[tokio::test]
    async fn test_read_missing_row_is_none() {
        let store = store(pool().await);
        assert_eq!(store.read(9999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_then_read_yields_empty() {
        let store = store(pool().await);
        let id = store.write([("Callsign", "DLH456")]).await.unwrap();

        assert!(store.delete(id).await.unwrap());
        assert_eq!(store.read(id).await.unwrap(), None);
        assert!(!store.delete(id).await.unwrap());
    }

    #[tokio::test]
    async fn test_find_with_like_and_equality() {
        let store = store(pool().await);
        store.write([("Callsign", "BAW123")]).await.unwrap();
        store.write([("Callsign", "DLH456")]).await.unwrap();

        let rows = store
            .find(SelectQuery::new().field("Callsign").criteria(Criteria::new().with("Callsign", "BAW%")))
            .await
            .unwrap();
        assert_eq!(rows, vec![vec![SqlValue::Text("BAW123".to_string())]]);

        let rows = store
            .find(
                SelectQuery::new()
                    .field("Callsign")
                    .criteria(Criteria::new().with("Callsign", "DLH456")),
            )
            .await
            .unwrap();
        assert_eq!(rows, vec![vec![SqlValue::Text("DLH456".to_string())]]);
    }

    #[tokio::test]
    async fn test_find_without_criteria_is_bounded_by_limit() {
        let store = store(pool().await).with_default_limit(3);
        for i in 0..5 {
            store
                .write([("Callsign", format!("TST{}", i).as_str())])
                .await
                .unwrap();
        }

        let rows = store.find(SelectQuery::new()).await.unwrap();
        assert_eq!(rows.len(), 3);

        let rows = store.find(SelectQuery::new().limit(2)).await.unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn test_numeric_columns_decode_by_storage_class() {
        let store = store(pool().await);
        let id = store
            .write([("Callsign", "BAW123"), ("Squawk", "7312")])
            .await
            .unwrap();

        // Squawk has INTEGER affinity; the bound text arrives as an integer.
        let row = store.read(id).await.unwrap().unwrap();
        assert_eq!(row[2], SqlValue::Integer(7312));
        assert_eq!(row[3], SqlValue::Null);
    }

    #[tokio::test]
    async fn test_unknown_column_is_an_error_not_empty() {
        let store = store(pool().await);
        store.write([("Callsign", "BAW123")]).await.unwrap();

        let err = store
            .find(SelectQuery::new().criteria(Criteria::new().with("WingSpan", "10")))
            .await
            .unwrap_err();
        assert!(err.message().contains("WingSpan"));

        let err = store
            .find(SelectQuery::new().field("NoSuchColumn"))
            .await
            .unwrap_err();
        assert!(err.message().contains("NoSuchColumn"));
    }

    #[tokio::test]
    async fn test_invalid_identifier_is_rejected_before_execution() {
        let store = store(pool().await);

        let err = store
            .find(SelectQuery::new().criteria(Criteria::new().with("bad-name", "x")))
            .await
            .unwrap_err();
        assert!(err.message().contains("bad-name"));

        let err = store.write([("bad name", "x")]).await.unwrap_err();
        assert!(err.message().contains("bad name"));
    }

    #[tokio::test]
    async fn test_raw_query() {
        let store = store(pool().await);
        store.write([("Callsign", "BAW123")]).await.unwrap();

        let rows = store
            .raw_query("SELECT COUNT(*) FROM Sessions")
            .await
            .unwrap();
        assert_eq!(rows, vec![vec![SqlValue::Integer(1)]]);

        assert!(store.raw_query("SELECT * FROM Missing").await.is_err());
    }
}
