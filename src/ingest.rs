//! Parquet directory ingestion. Reads every `.parquet` file in the
//! dataset directory into Arrow batches and converts them into SQL rows
//! with a leading `idx` row-index column.

use std::fs::File;
use std::path::Path;

use arrow::array::{
    Array, ArrayRef, BooleanArray, Float32Array, Float64Array, Int8Array, Int16Array, Int32Array,
    Int64Array, LargeStringArray, StringArray, UInt8Array, UInt16Array, UInt32Array,
};
use arrow::datatypes::{DataType, SchemaRef};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::backend::Value;
use crate::core::BenchError;

/// The unified tabular dataset, one row per play.
pub struct Dataset {
    schema: SchemaRef,
    batches: Vec<RecordBatch>,
    row_count: usize,
}

pub fn read_parquet_dir(dir: &Path) -> Result<Dataset, BenchError> {
    let mut paths: Vec<_> = std::fs::read_dir(dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "parquet"))
        .collect();
    paths.sort();

    if paths.is_empty() {
        return Err(BenchError::ParquetError(format!(
            "no parquet files in '{}'",
            dir.display()
        )));
    }

    let mut schema: Option<SchemaRef> = None;
    let mut batches = Vec::new();
    let mut row_count = 0usize;

    for path in &paths {
        log::debug!("Reading parquet file: {}", path.display());
        let file = File::open(path)?;
        let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
        let file_schema = builder.schema().clone();

        match &schema {
            None => schema = Some(file_schema),
            Some(expected) => {
                if expected.as_ref() != file_schema.as_ref() {
                    return Err(BenchError::ParquetError(format!(
                        "schema mismatch in file '{}': expected {:?}, got {:?}",
                        path.display(),
                        expected,
                        file_schema
                    )));
                }
            }
        }

        for batch in builder.build()? {
            let batch = batch?;
            row_count += batch.num_rows();
            batches.push(batch);
        }
    }

    // paths is non-empty, so schema is set by now
    let schema = schema.ok_or_else(|| {
        BenchError::ParquetError(format!("no readable parquet data in '{}'", dir.display()))
    })?;

    log::info!(
        "Read {} parquet files ({} batches, {} rows) from '{}'",
        paths.len(),
        batches.len(),
        row_count,
        dir.display()
    );

    Ok(Dataset {
        schema,
        batches,
        row_count,
    })
}

impl Dataset {
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn schema(&self) -> &SchemaRef {
        &self.schema
    }

    /// Approximate in-memory size of the loaded batches, in bytes.
    pub fn mem_size(&self) -> usize {
        self.batches
            .iter()
            .map(|b| b.get_array_memory_size())
            .sum()
    }

    /// Column names in table order: `idx`, then the dataset fields.
    pub fn column_names(&self) -> Vec<String> {
        let mut names = vec!["idx".to_string()];
        names.extend(self.schema.fields().iter().map(|f| f.name().clone()));
        names
    }

    /// `CREATE TABLE` statement both engines accept, `idx BIGINT` first.
    pub fn create_table_sql(&self, table: &str) -> Result<String, BenchError> {
        let mut defs = vec!["\"idx\" BIGINT".to_string()];
        for field in self.schema.fields() {
            let sql_type = sql_type(field.data_type()).ok_or_else(|| {
                BenchError::ParquetError(format!(
                    "unsupported column type for '{}': {:?}",
                    field.name(),
                    field.data_type()
                ))
            })?;
            defs.push(format!("\"{}\" {sql_type}", field.name()));
        }
        Ok(format!("CREATE TABLE {table} ({})", defs.join(", ")))
    }

    /// Convert every batch into SQL rows. `idx` is the global row index,
    /// contiguous across batch boundaries.
    pub fn all_rows(&self) -> Result<Vec<Vec<Value>>, BenchError> {
        let mut rows = Vec::with_capacity(self.row_count);
        let mut offset = 0usize;
        for batch in &self.batches {
            rows.extend(batch_rows(batch, offset)?);
            offset += batch.num_rows();
        }
        Ok(rows)
    }
}

fn sql_type(dtype: &DataType) -> Option<&'static str> {
    match dtype {
        DataType::Utf8 | DataType::LargeUtf8 => Some("TEXT"),
        DataType::Boolean => Some("BOOLEAN"),
        DataType::Int8 | DataType::Int16 | DataType::Int32 | DataType::Int64 => Some("BIGINT"),
        DataType::UInt8 | DataType::UInt16 | DataType::UInt32 => Some("BIGINT"),
        DataType::Float32 | DataType::Float64 => Some("DOUBLE"),
        _ => None,
    }
}

fn batch_rows(batch: &RecordBatch, idx_offset: usize) -> Result<Vec<Vec<Value>>, BenchError> {
    let width = batch.num_columns() + 1;
    let mut rows: Vec<Vec<Value>> = (0..batch.num_rows())
        .map(|r| {
            let mut row = Vec::with_capacity(width);
            row.push(Value::Int((idx_offset + r) as i64));
            row
        })
        .collect();
    for column in batch.columns() {
        append_column(column, &mut rows)?;
    }
    Ok(rows)
}

fn append_column(array: &ArrayRef, rows: &mut [Vec<Value>]) -> Result<(), BenchError> {
    macro_rules! push_cells {
        ($arr:expr, $to_value:expr) => {{
            let arr = $arr;
            for (i, row) in rows.iter_mut().enumerate() {
                if arr.is_null(i) {
                    row.push(Value::Null);
                } else {
                    row.push($to_value(arr.value(i)));
                }
            }
            Ok(())
        }};
    }

    if let Some(arr) = array.as_any().downcast_ref::<StringArray>() {
        push_cells!(arr, |v: &str| Value::Text(v.to_string()))
    } else if let Some(arr) = array.as_any().downcast_ref::<LargeStringArray>() {
        push_cells!(arr, |v: &str| Value::Text(v.to_string()))
    } else if let Some(arr) = array.as_any().downcast_ref::<BooleanArray>() {
        push_cells!(arr, |v: bool| Value::Int(v as i64))
    } else if let Some(arr) = array.as_any().downcast_ref::<Int8Array>() {
        push_cells!(arr, |v: i8| Value::Int(v as i64))
    } else if let Some(arr) = array.as_any().downcast_ref::<Int16Array>() {
        push_cells!(arr, |v: i16| Value::Int(v as i64))
    } else if let Some(arr) = array.as_any().downcast_ref::<Int32Array>() {
        push_cells!(arr, |v: i32| Value::Int(v as i64))
    } else if let Some(arr) = array.as_any().downcast_ref::<Int64Array>() {
        push_cells!(arr, |v: i64| Value::Int(v))
    } else if let Some(arr) = array.as_any().downcast_ref::<UInt8Array>() {
        push_cells!(arr, |v: u8| Value::Int(v as i64))
    } else if let Some(arr) = array.as_any().downcast_ref::<UInt16Array>() {
        push_cells!(arr, |v: u16| Value::Int(v as i64))
    } else if let Some(arr) = array.as_any().downcast_ref::<UInt32Array>() {
        push_cells!(arr, |v: u32| Value::Int(v as i64))
    } else if let Some(arr) = array.as_any().downcast_ref::<Float32Array>() {
        push_cells!(arr, |v: f32| Value::Real(v as f64))
    } else if let Some(arr) = array.as_any().downcast_ref::<Float64Array>() {
        push_cells!(arr, |v: f64| Value::Real(v))
    } else {
        Err(BenchError::ParquetError(format!(
            "unsupported array type: {:?}",
            array.data_type()
        )))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arrow::datatypes::{Field, Schema};
    use parquet::arrow::ArrowWriter;
    use tempfile::TempDir;

    use super::*;
    use crate::testutil::generate_pbp_parquet;

    #[test]
    fn test_read_dir_skips_non_parquet_and_indexes_rows() {
        let dir = TempDir::new().unwrap();
        generate_pbp_parquet(dir.path().join("part_0.parquet"), 40, 1).unwrap();
        generate_pbp_parquet(dir.path().join("part_1.parquet"), 60, 2).unwrap();
        std::fs::write(dir.path().join("README.md"), "not data").unwrap();

        let dataset = read_parquet_dir(dir.path()).unwrap();
        assert_eq!(dataset.row_count(), 100);
        // `idx` is prepended on top of the parquet schema.
        assert_eq!(dataset.schema().fields().len() + 1, dataset.column_names().len());

        let rows = dataset.all_rows().unwrap();
        assert_eq!(rows.len(), 100);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row[0], Value::Int(i as i64));
            assert_eq!(row.len(), dataset.column_names().len());
        }
    }

    #[test]
    fn test_create_table_sql() {
        let dir = TempDir::new().unwrap();
        generate_pbp_parquet(dir.path().join("part_0.parquet"), 3, 1).unwrap();
        let dataset = read_parquet_dir(dir.path()).unwrap();
        let sql = dataset.create_table_sql("pbp").unwrap();
        assert!(sql.starts_with("CREATE TABLE pbp (\"idx\" BIGINT, "));
        assert!(sql.contains("\"home_team\" TEXT"));
        assert!(sql.contains("\"two_point_attempt\" DOUBLE"));
    }

    #[test]
    fn test_empty_dir_is_error() {
        let dir = TempDir::new().unwrap();
        let err = read_parquet_dir(dir.path()).err().unwrap();
        assert!(matches!(err, BenchError::ParquetError(_)));
    }

    #[test]
    fn test_schema_mismatch_between_files_is_error() {
        let dir = TempDir::new().unwrap();
        generate_pbp_parquet(dir.path().join("part_0.parquet"), 10, 1).unwrap();

        // Second file retypes `two_point_attempt`, so the directory no
        // longer describes one unified table.
        let schema = Arc::new(Schema::new(vec![
            Field::new("home_team", DataType::Utf8, false),
            Field::new("two_point_attempt", DataType::Int64, true),
        ]));
        let columns: Vec<ArrayRef> = vec![
            Arc::new(StringArray::from(vec!["NE", "KC"])),
            Arc::new(Int64Array::from(vec![Some(0), Some(1)])),
        ];
        let batch = RecordBatch::try_new(schema.clone(), columns).unwrap();
        let file = File::create(dir.path().join("part_1.parquet")).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let err = read_parquet_dir(dir.path()).err().unwrap();
        match err {
            BenchError::ParquetError(msg) => {
                assert!(msg.contains("schema mismatch"), "message: {msg}");
                assert!(msg.contains("part_1.parquet"), "message: {msg}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
