//! Timed trial runner: untimed per-trial setup, one timed work call,
//! one progress tick per trial.

use std::time::{Duration, Instant};

use log::debug;

use crate::backend::{Backend, Value};
use crate::core::BenchError;
use crate::progress::{ProgressSink, Task};

/// What one timed work call produced.
#[derive(Debug, Clone, PartialEq)]
pub enum TrialOutput {
    Rows(Vec<Vec<Value>>),
    Affected(u64),
}

/// One completed trial. Immutable once recorded, ordered by `trial`.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialResult {
    pub scenario: String,
    pub backend: String,
    pub trial: usize,
    pub elapsed: Duration,
    pub output: TrialOutput,
}

/// Run `trials` iterations of `work` against `backend`, each preceded by
/// an untimed `setup` call. Emits exactly `trials` progress ticks: one
/// after each timed trial, none on scope exit. If `work` fails the error
/// propagates and the scenario aborts; the task's finish notification
/// still fires through the guard.
pub fn run_trials<S, W>(
    scenario: &str,
    backend: &mut dyn Backend,
    trials: usize,
    sink: &dyn ProgressSink,
    mut setup: S,
    mut work: W,
) -> Result<Vec<TrialResult>, BenchError>
where
    S: FnMut(&mut dyn Backend) -> Result<(), BenchError>,
    W: FnMut(&mut dyn Backend) -> Result<TrialOutput, BenchError>,
{
    let task_name = format!("{scenario}/{}", backend.name());
    let task = Task::begin(sink, task_name.as_str(), trials as u64);

    let mut results = Vec::with_capacity(trials);
    for trial in 0..trials {
        setup(backend)?;
        let start = Instant::now();
        let output = work(backend)?;
        let elapsed = start.elapsed();
        debug!("{task_name}: trial {trial} took {elapsed:?}");
        results.push(TrialResult {
            scenario: scenario.to_string(),
            backend: backend.name().to_string(),
            trial,
            elapsed,
            output,
        });
        task.advance();
    }
    Ok(results)
}

/// Mean elapsed time in seconds across a trial sequence.
pub fn mean_secs(results: &[TrialResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let total: f64 = results.iter().map(|r| r.elapsed.as_secs_f64()).sum();
    total / results.len() as f64
}
