//! Update scenarios: single-row incremental updates driven by random
//! score samples, then whole-team batch updates. Both phases land in one
//! report.

use std::cell::Cell;
use std::path::PathBuf;

use log::{debug, info};

use crate::backend::Backend;
use crate::conf::Config;
use crate::core::BenchError;
use crate::harness::{TrialOutput, mean_secs, run_trials};
use crate::progress::ProgressSink;
use crate::report::{ReportBuilder, TimeUnit};
use crate::sample::{ScoreSample, ScoreSampler};
use crate::scenario::heading;

pub const REPORT_FILE: &str = "nfl_pbp_updates.md";

const DETAIL_COLUMNS: [&str; 5] = ["index", "home_score", "away_score", "result", "total"];

pub fn run_updates(
    config: &Config,
    backends: &mut [Box<dyn Backend>],
    sink: &dyn ProgressSink,
) -> Result<PathBuf, BenchError> {
    let table = &config.dataset.table;

    info!("Starting incremental update tasks");
    let mut incremental_rows = Vec::with_capacity(backends.len());
    let mut detail_sections = Vec::with_capacity(backends.len());
    for backend in backends.iter_mut() {
        let mut sampler = ScoreSampler::new();
        let current = Cell::new(ScoreSample::default());
        let mut samples = Vec::with_capacity(config.trials.incremental);
        let results = run_trials(
            "incremental_update",
            backend.as_mut(),
            config.trials.incremental,
            sink,
            |_| {
                // Untimed: draw the sample this trial will apply.
                let sample = sampler.next_sample();
                current.set(sample);
                samples.push(sample);
                Ok(())
            },
            |b| {
                let s = current.get();
                let affected = b.execute(&incremental_sql(table, &s))?;
                if affected == 0 {
                    // Sampled index past the live table's row count.
                    debug!("idx {} not present, update was a no-op", s.index);
                }
                Ok(TrialOutput::Affected(affected))
            },
        )?;
        let mean = mean_secs(&results);
        info!(
            "{} incremental update took {:.2} milliseconds on avg over {} trials",
            backend.name(),
            mean * 1000.0,
            results.len()
        );
        incremental_rows.push((backend.name().to_string(), mean));

        let rows = samples.iter().map(ScoreSample::detail_row).collect();
        detail_sections.push((heading(backend.name()), rows));
    }

    info!("Starting batch update tasks");
    let batch_sql = format!(
        "UPDATE {table} SET total_home_score = 10, total_away_score = 20, \
         result = -10, total = 30 WHERE home_team = 'NE'"
    );
    let mut batch_rows = Vec::with_capacity(backends.len());
    for backend in backends.iter_mut() {
        let results = run_trials(
            "batch_update",
            backend.as_mut(),
            config.trials.batch,
            sink,
            |_| Ok(()),
            |b| Ok(TrialOutput::Affected(b.execute(&batch_sql)?)),
        )?;
        let mean = mean_secs(&results);
        info!(
            "{} batch update took {:.2} seconds on avg over {} trials",
            backend.name(),
            mean,
            results.len()
        );
        batch_rows.push((backend.name().to_string(), mean));
    }

    let mut report = ReportBuilder::new();
    report.add_timer(
        "Timer (Incremental Updates)",
        TimeUnit::Millis,
        incremental_rows,
    );
    report.add_timer("Timer (Batch Updates)", TimeUnit::Seconds, batch_rows);
    for (section_heading, rows) in detail_sections {
        report.add_detail(&section_heading, &DETAIL_COLUMNS, 0, rows);
    }
    let path = config.report.out_dir.join(REPORT_FILE);
    report.write_to(&path)?;
    Ok(path)
}

fn incremental_sql(table: &str, s: &ScoreSample) -> String {
    format!(
        "UPDATE {table} SET total_home_score = {}, total_away_score = {}, \
         result = {}, total = {} WHERE idx = {}",
        s.home_score,
        s.away_score,
        s.result(),
        s.total(),
        s.index
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incremental_sql_interpolation() {
        let s = ScoreSample {
            home_score: 21,
            away_score: 14,
            index: 5,
        };
        assert_eq!(
            incremental_sql("pbp", &s),
            "UPDATE pbp SET total_home_score = 21, total_away_score = 14, \
             result = 7, total = 35 WHERE idx = 5"
        );
    }
}
