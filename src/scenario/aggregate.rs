//! Aggregate-query scenario: a GROUP BY over the whole play table,
//! with the final trial's result rows sampled into the report.

use std::path::PathBuf;

use log::info;

use crate::backend::Backend;
use crate::conf::Config;
use crate::core::BenchError;
use crate::harness::{TrialOutput, mean_secs, run_trials};
use crate::progress::ProgressSink;
use crate::report::{ReportBuilder, TimeUnit};
use crate::scenario::heading;

pub const REPORT_FILE: &str = "nfl_pbp_aggs.md";

/// Detail cells are ratio-like aggregates; render at 8 decimals.
const AGG_PRECISION: usize = 8;

pub fn run_aggregate(
    config: &Config,
    backends: &mut [Box<dyn Backend>],
    sink: &dyn ProgressSink,
) -> Result<PathBuf, BenchError> {
    let table = &config.dataset.table;
    let agg_sql = format!(
        "select home_team, avg(two_point_attempt) from {table} \
         group by home_team order by home_team"
    );

    info!("Starting aggregate tasks");
    let mut timer_rows = Vec::with_capacity(backends.len());
    let mut detail_sections = Vec::with_capacity(backends.len());
    for backend in backends.iter_mut() {
        let results = run_trials(
            "aggregate",
            backend.as_mut(),
            config.trials.aggregate,
            sink,
            |_| Ok(()),
            |b| Ok(TrialOutput::Rows(b.query(&agg_sql)?)),
        )?;
        let mean = mean_secs(&results);
        info!(
            "{} aggregate took {:.2} seconds on avg over {} trials",
            backend.name(),
            mean,
            results.len()
        );
        timer_rows.push((backend.name().to_string(), mean));

        // Keep the last trial's rows as the sampled output.
        let rows = match results.into_iter().next_back() {
            Some(result) => match result.output {
                TrialOutput::Rows(rows) => rows,
                TrialOutput::Affected(_) => Vec::new(),
            },
            None => Vec::new(),
        };
        detail_sections.push((heading(backend.name()), rows));
    }

    let mut report = ReportBuilder::new();
    report.add_timer("Timer", TimeUnit::Seconds, timer_rows);
    for (section_heading, rows) in detail_sections {
        report.add_detail(
            &section_heading,
            &["home_team", "avg(two_point_attempt)"],
            AGG_PRECISION,
            rows,
        );
    }
    let path = config.report.out_dir.join(REPORT_FILE);
    report.write_to(&path)?;
    Ok(path)
}
