//! Pluggable backend trait for the engines under comparison.

mod duckdb;
mod sqlite;
mod value;

use std::path::Path;

pub use self::duckdb::DuckDbBackend;
pub use self::sqlite::SqliteBackend;
pub use self::value::Value;

use crate::core::BenchError;

/// One engine connection under benchmark. Each instance owns its
/// connection exclusively for the whole run; the harness performs no
/// query building, validation, or rollback on top of it.
pub trait Backend {
    /// Human-readable name for report identification.
    fn name(&self) -> &'static str;

    /// Execute a statement that produces no result rows.
    /// Returns the affected-row count where the engine reports one.
    fn execute(&mut self, sql: &str) -> Result<u64, BenchError>;

    /// Execute a query and fetch all result rows.
    fn query(&mut self, sql: &str) -> Result<Vec<Vec<Value>>, BenchError>;

    /// Bulk-insert rows into `table` through one prepared statement,
    /// using the engine's native fast path where it has one.
    fn insert_rows(
        &mut self,
        table: &str,
        columns: &[String],
        rows: &[Vec<Value>],
    ) -> Result<u64, BenchError>;

    /// Close the underlying connection.
    fn close(self: Box<Self>) -> Result<(), BenchError>;
}

/// Open a backend by its configured name. Database files land in `db_dir`.
pub fn open(name: &str, db_dir: &Path) -> Result<Box<dyn Backend>, BenchError> {
    match name {
        "sqlite" => Ok(Box::new(SqliteBackend::open(
            db_dir.join("nfl_pbp.db"),
        )?)),
        "duckdb" => Ok(Box::new(DuckDbBackend::open(
            db_dir.join("nfl_pbp.duckdb"),
        )?)),
        other => Err(BenchError::BackendError(format!(
            "unknown backend: {other}"
        ))),
    }
}

pub(crate) fn insert_sql(table: &str, columns: &[String]) -> String {
    let quoted = columns
        .iter()
        .map(|c| format!("\"{c}\""))
        .collect::<Vec<_>>()
        .join(", ");
    let placeholders = vec!["?"; columns.len()].join(", ");
    format!("INSERT INTO {table} ({quoted}) VALUES ({placeholders})")
}
