//! Benchmark scenarios. Each drives the trial runner once per backend,
//! backends strictly in the configured order, then writes one report.

mod aggregate;
mod load;
mod updates;

use std::fs;

pub use aggregate::run_aggregate;
pub use load::run_load;
pub use updates::run_updates;

use log::info;

use crate::backend::{self, Backend};
use crate::conf::Config;
use crate::core::{BenchError, ScenarioArg};
use crate::ingest::read_parquet_dir;
use crate::progress::ProgressSink;

/// Open the configured backends, run the selected scenario(s) in order,
/// and close every connection at run end.
pub fn run(config: &Config, which: ScenarioArg, sink: &dyn ProgressSink) -> Result<(), BenchError> {
    fs::create_dir_all(&config.backends.db_dir)?;
    let mut backends: Vec<Box<dyn Backend>> = config
        .backends
        .order
        .iter()
        .map(|name| backend::open(name, &config.backends.db_dir))
        .collect::<Result<_, _>>()?;

    match which {
        ScenarioArg::Load => {
            let dataset = read_parquet_dir(&config.dataset.parquet_dir)?;
            run_load(config, &dataset, &mut backends, sink)?;
        }
        ScenarioArg::Aggregate => {
            run_aggregate(config, &mut backends, sink)?;
        }
        ScenarioArg::Updates => {
            run_updates(config, &mut backends, sink)?;
        }
        ScenarioArg::All => {
            let dataset = read_parquet_dir(&config.dataset.parquet_dir)?;
            run_load(config, &dataset, &mut backends, sink)?;
            run_aggregate(config, &mut backends, sink)?;
            run_updates(config, &mut backends, sink)?;
        }
    }

    for backend in backends {
        backend.close()?;
    }
    info!("Benchmark run complete");
    Ok(())
}

/// Report heading for a backend: name with the first letter upcased,
/// e.g. "duckdb" -> "Duckdb".
fn heading(backend: &str) -> String {
    let mut chars = backend.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
