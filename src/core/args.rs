use clap::{Parser, ValueEnum};
use log::kv::{ToValue, Value};

#[derive(Parser, Debug, PartialEq)]
#[command(version, about)]
pub struct CliArgs {
    #[arg(short, long)]
    pub config: Option<String>,

    /// Which benchmark scenario to run.
    #[arg(short, long, value_enum, default_value_t = ScenarioArg::All)]
    pub scenario: ScenarioArg,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ScenarioArg {
    Load,
    Aggregate,
    Updates,
    All,
}

impl ToValue for CliArgs {
    fn to_value(&self) -> Value<'_> {
        Value::from_debug(self)
    }
}
