use serde::{Deserialize, Serialize};

/// Per-scenario repeat counts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TrialsConfig {
    #[serde(default = "TrialsConfig::default_load")]
    pub load: usize,
    #[serde(default = "TrialsConfig::default_aggregate")]
    pub aggregate: usize,
    #[serde(default = "TrialsConfig::default_incremental")]
    pub incremental: usize,
    #[serde(default = "TrialsConfig::default_batch")]
    pub batch: usize,
}

impl TrialsConfig {
    fn default_load() -> usize {
        5
    }

    fn default_aggregate() -> usize {
        10
    }

    fn default_incremental() -> usize {
        10_000
    }

    fn default_batch() -> usize {
        100
    }
}

impl Default for TrialsConfig {
    fn default() -> Self {
        Self {
            load: Self::default_load(),
            aggregate: Self::default_aggregate(),
            incremental: Self::default_incremental(),
            batch: Self::default_batch(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trials_default() {
        let trials = TrialsConfig::default();
        assert_eq!(trials.load, 5);
        assert_eq!(trials.aggregate, 10);
        assert_eq!(trials.incremental, 10_000);
        assert_eq!(trials.batch, 100);
    }
}
