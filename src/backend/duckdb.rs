use std::path::Path;

use duckdb::{Connection, appender_params_from_iter};

use crate::backend::{Backend, Value};
use crate::core::BenchError;

pub struct DuckDbBackend {
    conn: Connection,
}

impl DuckDbBackend {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, BenchError> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self, BenchError> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }
}

impl Backend for DuckDbBackend {
    fn name(&self) -> &'static str {
        "duckdb"
    }

    fn execute(&mut self, sql: &str) -> Result<u64, BenchError> {
        let affected = self.conn.execute(sql, [])?;
        Ok(affected as u64)
    }

    fn query(&mut self, sql: &str) -> Result<Vec<Vec<Value>>, BenchError> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            let ncols = row.as_ref().column_count();
            let mut cells = Vec::with_capacity(ncols);
            for i in 0..ncols {
                cells.push(Value::from(row.get_ref(i)?));
            }
            out.push(cells);
        }
        Ok(out)
    }

    fn insert_rows(
        &mut self,
        table: &str,
        _columns: &[String],
        rows: &[Vec<Value>],
    ) -> Result<u64, BenchError> {
        // The appender is DuckDB's bulk path; it binds every column in
        // table order, which matches the order we created the table in.
        let mut appender = self.conn.appender(table)?;
        for row in rows {
            appender.append_row(appender_params_from_iter(row))?;
        }
        appender.flush()?;
        Ok(rows.len() as u64)
    }

    fn close(self: Box<Self>) -> Result<(), BenchError> {
        self.conn
            .close()
            .map_err(|(_, e)| BenchError::BackendError(e.to_string()))
    }
}
