pub mod backend;
pub mod conf;
pub mod core;
pub mod harness;
pub mod ingest;
pub mod progress;
pub mod report;
pub mod sample;
pub mod scenario;

#[cfg(feature = "testutil")]
pub mod testutil;
