use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DatasetConfig {
    /// Directory of Parquet files holding the play-by-play dataset.
    #[serde(default = "DatasetConfig::default_parquet_dir")]
    pub parquet_dir: PathBuf,
    #[serde(default = "DatasetConfig::default_table")]
    pub table: String,
}

impl DatasetConfig {
    fn default_parquet_dir() -> PathBuf {
        PathBuf::from("./parquet_files")
    }

    fn default_table() -> String {
        String::from("pbp")
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            parquet_dir: Self::default_parquet_dir(),
            table: Self::default_table(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_default() {
        let dataset = DatasetConfig::default();
        assert_eq!(dataset.parquet_dir, PathBuf::from("./parquet_files"));
        assert_eq!(dataset.table, "pbp");
    }
}
