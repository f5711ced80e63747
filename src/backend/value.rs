use std::fmt;

/// Row cell crossing the backend boundary. Both engine adapters bind it
/// as a statement parameter and produce it from result columns.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Int(i64),
    Real(f64),
    Text(String),
}

impl Value {
    /// Render with a fixed number of decimals for `Real`; integers and
    /// text render plainly, `Null` renders empty.
    pub fn render(&self, precision: usize) -> String {
        match self {
            Value::Null => String::new(),
            Value::Int(i) => i.to_string(),
            Value::Real(f) => format!("{f:.precision$}"),
            Value::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Int(i) => write!(f, "{i}"),
            Value::Real(r) => write!(f, "{r}"),
            Value::Text(s) => write!(f, "{s}"),
        }
    }
}

impl rusqlite::ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
        use rusqlite::types::{ToSqlOutput, Value as SqlValue, ValueRef};
        Ok(match self {
            Value::Null => ToSqlOutput::Owned(SqlValue::Null),
            Value::Int(i) => ToSqlOutput::Owned(SqlValue::Integer(*i)),
            Value::Real(f) => ToSqlOutput::Owned(SqlValue::Real(*f)),
            Value::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
        })
    }
}

impl duckdb::ToSql for Value {
    fn to_sql(&self) -> duckdb::Result<duckdb::types::ToSqlOutput<'_>> {
        use duckdb::types::{ToSqlOutput, Value as SqlValue, ValueRef};
        Ok(match self {
            Value::Null => ToSqlOutput::Owned(SqlValue::Null),
            Value::Int(i) => ToSqlOutput::Owned(SqlValue::BigInt(*i)),
            Value::Real(f) => ToSqlOutput::Owned(SqlValue::Double(*f)),
            Value::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
        })
    }
}

impl From<rusqlite::types::ValueRef<'_>> for Value {
    fn from(v: rusqlite::types::ValueRef<'_>) -> Self {
        use rusqlite::types::ValueRef;
        match v {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(i) => Value::Int(i),
            ValueRef::Real(f) => Value::Real(f),
            ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
            ValueRef::Blob(b) => Value::Text(String::from_utf8_lossy(b).into_owned()),
        }
    }
}

impl From<duckdb::types::ValueRef<'_>> for Value {
    fn from(v: duckdb::types::ValueRef<'_>) -> Self {
        use duckdb::types::ValueRef;
        match v {
            ValueRef::Null => Value::Null,
            ValueRef::Boolean(b) => Value::Int(b as i64),
            ValueRef::TinyInt(i) => Value::Int(i as i64),
            ValueRef::SmallInt(i) => Value::Int(i as i64),
            ValueRef::Int(i) => Value::Int(i as i64),
            ValueRef::BigInt(i) => Value::Int(i),
            ValueRef::UTinyInt(i) => Value::Int(i as i64),
            ValueRef::USmallInt(i) => Value::Int(i as i64),
            ValueRef::UInt(i) => Value::Int(i as i64),
            ValueRef::Float(f) => Value::Real(f as f64),
            ValueRef::Double(f) => Value::Real(f),
            ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
            other => Value::Text(format!("{other:?}")),
        }
    }
}
