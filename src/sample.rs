//! Random update payloads for the incremental-update scenario.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::backend::Value;

/// Scores are drawn from `[0, SCORE_RANGE)`.
pub const SCORE_RANGE: i64 = 100;
/// Row indexes are drawn from `[0, ROW_INDEX_RANGE)`, the row-count domain
/// of the full play-by-play dataset. An index past the live table's actual
/// row count surfaces as a zero-row update, which is benign.
pub const ROW_INDEX_RANGE: i64 = 1_230_855;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreSample {
    pub home_score: i64,
    pub away_score: i64,
    pub index: i64,
}

impl ScoreSample {
    pub fn result(&self) -> i64 {
        self.home_score - self.away_score
    }

    pub fn total(&self) -> i64 {
        self.home_score + self.away_score
    }

    /// Cells in report order: index, home, away, result, total.
    pub fn detail_row(&self) -> Vec<Value> {
        vec![
            Value::Int(self.index),
            Value::Int(self.home_score),
            Value::Int(self.away_score),
            Value::Int(self.result()),
            Value::Int(self.total()),
        ]
    }
}

pub struct ScoreSampler {
    rng: StdRng,
}

impl ScoreSampler {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw a fresh sample. Repeats across calls are possible.
    pub fn next_sample(&mut self) -> ScoreSample {
        ScoreSample {
            home_score: self.rng.gen_range(0..SCORE_RANGE),
            away_score: self.rng.gen_range(0..SCORE_RANGE),
            index: self.rng.gen_range(0..ROW_INDEX_RANGE),
        }
    }
}

impl Default for ScoreSampler {
    fn default() -> Self {
        Self::new()
    }
}
