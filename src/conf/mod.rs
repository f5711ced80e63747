mod backends;
mod config;
mod dataset;
mod report;
mod trials;

pub use backends::BackendsConfig;
pub use config::Config;
pub use dataset::DatasetConfig;
pub use report::ReportConfig;
pub use trials::TrialsConfig;
