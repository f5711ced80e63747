//! Test fixtures and instrumented collaborators.
//!
//! This module is only available when the `testutil` feature is enabled.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;

use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::progress::ProgressSink;

const TEAMS: [&str; 8] = ["ARI", "DAL", "GB", "KC", "MIA", "NE", "PHI", "SEA"];

/// Schema of the generated play-by-play fixture (without the `idx` column
/// the harness adds at load time).
pub fn pbp_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("home_team", DataType::Utf8, false),
        Field::new("two_point_attempt", DataType::Float64, true),
        Field::new("total_home_score", DataType::Int64, true),
        Field::new("total_away_score", DataType::Int64, true),
        Field::new("result", DataType::Int64, true),
        Field::new("total", DataType::Int64, true),
    ]))
}

/// Write a Parquet fixture with `num_rows` plausible play rows. The same
/// seed always produces the same file.
pub fn generate_pbp_parquet(
    path: impl AsRef<Path>,
    num_rows: usize,
    seed: u64,
) -> std::io::Result<()> {
    let schema = pbp_schema();
    let mut rng = StdRng::seed_from_u64(seed);

    let teams: StringArray = (0..num_rows)
        .map(|i| Some(TEAMS[i % TEAMS.len()]))
        .collect();
    let two_point: Float64Array = (0..num_rows)
        .map(|_| Some(if rng.gen_range(0..20) == 0 { 1.0 } else { 0.0 }))
        .collect();
    let home: Vec<i64> = (0..num_rows).map(|_| rng.gen_range(0..60)).collect();
    let away: Vec<i64> = (0..num_rows).map(|_| rng.gen_range(0..60)).collect();
    let result: Int64Array = home.iter().zip(&away).map(|(h, a)| Some(h - a)).collect();
    let total: Int64Array = home.iter().zip(&away).map(|(h, a)| Some(h + a)).collect();
    let home: Int64Array = home.into_iter().map(Some).collect();
    let away: Int64Array = away.into_iter().map(Some).collect();

    let columns: Vec<ArrayRef> = vec![
        Arc::new(teams),
        Arc::new(two_point),
        Arc::new(home),
        Arc::new(away),
        Arc::new(result),
        Arc::new(total),
    ];
    let batch = RecordBatch::try_new(schema.clone(), columns).unwrap();

    let file = File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
    writer.write(&batch).unwrap();
    writer.close().unwrap();
    Ok(())
}

/// Every notification a progress sink received, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Start(String, u64),
    Advance(String),
    Finish(String),
}

/// Sink that records every notification for assertions.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<ProgressEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Number of advance ticks recorded for `task`.
    pub fn ticks(&self, task: &str) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, ProgressEvent::Advance(name) if name == task))
            .count()
    }
}

impl ProgressSink for RecordingSink {
    fn start(&self, task: &str, total: u64) {
        self.events
            .lock()
            .unwrap()
            .push(ProgressEvent::Start(task.to_string(), total));
    }

    fn advance(&self, task: &str) {
        self.events
            .lock()
            .unwrap()
            .push(ProgressEvent::Advance(task.to_string()));
    }

    fn finish(&self, task: &str) {
        self.events
            .lock()
            .unwrap()
            .push(ProgressEvent::Finish(task.to_string()));
    }
}
