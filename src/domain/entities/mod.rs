//! Domain entities
//!
//! Core business objects that represent the fundamental concepts
//! in the format detection domain.

mod detection;
mod file_signature;
mod processing_stats;

pub use detection::{DetectedFormat, Detection};
pub use file_signature::{FileSignature, ImageFormat, LabelRule, SecondaryMatch};
pub use processing_stats::ProcessingStats;
