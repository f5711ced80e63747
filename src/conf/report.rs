use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    #[serde(default = "ReportConfig::default_out_dir")]
    pub out_dir: PathBuf,
}

impl ReportConfig {
    fn default_out_dir() -> PathBuf {
        PathBuf::from("./results")
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            out_dir: Self::default_out_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_default() {
        let report = ReportConfig::default();
        assert_eq!(report.out_dir, PathBuf::from("./results"));
    }
}
