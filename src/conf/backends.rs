use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Which engines to benchmark, and in which order reports list them.
/// Reports never re-sort this order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BackendsConfig {
    #[serde(default = "BackendsConfig::default_db_dir")]
    pub db_dir: PathBuf,
    #[serde(default = "BackendsConfig::default_order")]
    pub order: Vec<String>,
}

impl BackendsConfig {
    fn default_db_dir() -> PathBuf {
        PathBuf::from("./dbs")
    }

    fn default_order() -> Vec<String> {
        vec![String::from("duckdb"), String::from("sqlite")]
    }
}

impl Default for BackendsConfig {
    fn default() -> Self {
        Self {
            db_dir: Self::default_db_dir(),
            order: Self::default_order(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backends_default() {
        let backends = BackendsConfig::default();
        assert_eq!(backends.db_dir, PathBuf::from("./dbs"));
        assert_eq!(backends.order, vec!["duckdb", "sqlite"]);
    }
}
