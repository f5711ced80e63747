use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum BenchError {
    #[error("Cannot parse config: {0}")]
    ConfigParsingError(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Backend error: {0}")]
    BackendError(String),
    #[error("Parquet error: {0}")]
    ParquetError(String),
    #[error("Report error: {0}")]
    ReportError(String),
}

impl From<std::io::Error> for BenchError {
    fn from(err: std::io::Error) -> Self {
        BenchError::IoError(err.to_string())
    }
}

impl From<arrow::error::ArrowError> for BenchError {
    fn from(err: arrow::error::ArrowError) -> Self {
        BenchError::ParquetError(err.to_string())
    }
}

impl From<parquet::errors::ParquetError> for BenchError {
    fn from(err: parquet::errors::ParquetError) -> Self {
        BenchError::ParquetError(err.to_string())
    }
}

impl From<rusqlite::Error> for BenchError {
    fn from(err: rusqlite::Error) -> Self {
        BenchError::BackendError(err.to_string())
    }
}

impl From<duckdb::Error> for BenchError {
    fn from(err: duckdb::Error) -> Self {
        BenchError::BackendError(err.to_string())
    }
}
