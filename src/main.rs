use anyhow::Result;
use clap::Parser;
use log::info;

use pbpbench::conf::Config;
use pbpbench::core::{CliArgs, setup_logging};
use pbpbench::progress::LogSink;
use pbpbench::scenario;

fn main() -> Result<()> {
    setup_logging();
    let args = CliArgs::parse();
    info!(args; "pbpbench started");

    let config = match &args.config {
        Some(path) => Config::from_path(path)?,
        None => Config::default(),
    };

    scenario::run(&config, args.scenario, &LogSink)?;
    Ok(())
}
