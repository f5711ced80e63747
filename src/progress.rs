//! Observational progress reporting. Sinks receive start/advance/finish
//! notifications and feed nothing back into the harness.

use log::{debug, info};

pub trait ProgressSink {
    fn start(&self, task: &str, total: u64);
    fn advance(&self, task: &str);
    fn finish(&self, task: &str);
}

/// Reports task boundaries through the `log` facade.
pub struct LogSink;

impl ProgressSink for LogSink {
    fn start(&self, task: &str, total: u64) {
        info!("{task}: starting, {total} steps");
    }

    fn advance(&self, task: &str) {
        debug!("{task}: step done");
    }

    fn finish(&self, task: &str) {
        info!("{task}: finished");
    }
}

pub struct NoopSink;

impl ProgressSink for NoopSink {
    fn start(&self, _task: &str, _total: u64) {}
    fn advance(&self, _task: &str) {}
    fn finish(&self, _task: &str) {}
}

/// A started progress task. `finish` fires on drop, so every exit path
/// out of a trial loop closes the task, error propagation included.
pub struct Task<'a> {
    sink: &'a dyn ProgressSink,
    name: String,
}

impl<'a> Task<'a> {
    pub fn begin(sink: &'a dyn ProgressSink, name: impl Into<String>, total: u64) -> Self {
        let name = name.into();
        sink.start(&name, total);
        Self { sink, name }
    }

    pub fn advance(&self) {
        self.sink.advance(&self.name);
    }
}

impl Drop for Task<'_> {
    fn drop(&mut self) {
        self.sink.finish(&self.name);
    }
}
