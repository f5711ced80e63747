mod args;
mod error;
mod logger;

pub use args::{CliArgs, ScenarioArg};
pub use logger::setup_logging;
pub use error::BenchError;
