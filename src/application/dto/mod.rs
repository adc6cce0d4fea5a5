//! Data Transfer Objects

mod process_options;
mod processing_report;

pub use process_options::{ProcessOptions, DEFAULT_BATCH_SIZE};
pub use processing_report::ProcessingReport;
