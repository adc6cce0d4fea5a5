//! Local filesystem adapters

mod format_detector;
mod header_reader;

pub use format_detector::FormatDetector;
pub use header_reader::read_header;
