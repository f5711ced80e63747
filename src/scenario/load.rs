//! Table-load scenario: drop, recreate, and bulk-fill the play table,
//! timing the create+fill against each backend.

use std::path::PathBuf;

use log::info;

use crate::backend::Backend;
use crate::conf::Config;
use crate::core::BenchError;
use crate::harness::{TrialOutput, mean_secs, run_trials};
use crate::ingest::Dataset;
use crate::progress::ProgressSink;
use crate::report::{ReportBuilder, TimeUnit};

pub const REPORT_FILE: &str = "nfl_pbp_to_db.md";

pub fn run_load(
    config: &Config,
    dataset: &Dataset,
    backends: &mut [Box<dyn Backend>],
    sink: &dyn ProgressSink,
) -> Result<PathBuf, BenchError> {
    let table = &config.dataset.table;
    let create_sql = dataset.create_table_sql(table)?;
    let drop_sql = format!("DROP TABLE IF EXISTS {table}");
    let columns = dataset.column_names();

    // Row conversion happens once, outside every timed window, so trials
    // measure only backend work.
    let rows = dataset.all_rows()?;
    info!(
        "Dataset: {} rows, approx {:.2} gb in memory",
        dataset.row_count(),
        dataset.mem_size() as f64 / 1_000_000_000.0
    );

    info!("Starting DB load tasks");
    let mut timer_rows = Vec::with_capacity(backends.len());
    for backend in backends.iter_mut() {
        let results = run_trials(
            "load",
            backend.as_mut(),
            config.trials.load,
            sink,
            |b| {
                b.execute(&drop_sql)?;
                Ok(())
            },
            |b| {
                b.execute(&create_sql)?;
                let inserted = b.insert_rows(table, &columns, &rows)?;
                Ok(TrialOutput::Affected(inserted))
            },
        )?;
        let mean = mean_secs(&results);
        info!(
            "{} loaded {} rows in {:.2} seconds on avg over {} trials",
            backend.name(),
            dataset.row_count(),
            mean,
            results.len()
        );
        timer_rows.push((backend.name().to_string(), mean));
    }

    let mut report = ReportBuilder::new();
    report.add_timer("Timer", TimeUnit::Seconds, timer_rows);
    let path = config.report.out_dir.join(REPORT_FILE);
    report.write_to(&path)?;
    Ok(path)
}
