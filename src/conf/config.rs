use std::path::Path;

use config::Config as CConfig;
use serde::{Deserialize, Serialize};

use crate::conf::{BackendsConfig, DatasetConfig, ReportConfig, TrialsConfig};
use crate::core::BenchError::{self, ConfigParsingError};

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub backends: BackendsConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub trials: TrialsConfig,
}

impl Config {
    pub fn from_str(toml_str: &str) -> Result<Config, BenchError> {
        let config = CConfig::builder()
            .add_source(config::File::from_str(toml_str, config::FileFormat::Toml))
            .build()
            .map_err(|e| ConfigParsingError(e.to_string()))?
            .try_deserialize::<Config>()
            .map_err(|e| ConfigParsingError(e.to_string()))?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Config, BenchError> {
        let config = CConfig::builder()
            .add_source(config::File::from(path.as_ref().to_path_buf()))
            .build()
            .map_err(|e| ConfigParsingError(e.to_string()))?
            .try_deserialize::<Config>()
            .map_err(|e| ConfigParsingError(e.to_string()))?;
        Ok(config)
    }
}
