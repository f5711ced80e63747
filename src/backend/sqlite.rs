use std::path::Path;

use rusqlite::{Connection, params_from_iter};

use crate::backend::{Backend, Value, insert_sql};
use crate::core::BenchError;

pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, BenchError> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self, BenchError> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }
}

impl Backend for SqliteBackend {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn execute(&mut self, sql: &str) -> Result<u64, BenchError> {
        let affected = self.conn.execute(sql, [])?;
        Ok(affected as u64)
    }

    fn query(&mut self, sql: &str) -> Result<Vec<Vec<Value>>, BenchError> {
        let mut stmt = self.conn.prepare(sql)?;
        let ncols = stmt.column_count();
        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
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
        columns: &[String],
        rows: &[Vec<Value>],
    ) -> Result<u64, BenchError> {
        let sql = insert_sql(table, columns);
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(&sql)?;
            for row in rows {
                stmt.execute(params_from_iter(row))?;
            }
        }
        tx.commit()?;
        Ok(rows.len() as u64)
    }

    fn close(self: Box<Self>) -> Result<(), BenchError> {
        self.conn
            .close()
            .map_err(|(_, e)| BenchError::BackendError(e.to_string()))
    }
}
