pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

pub use application::{ProcessDirectoryUseCase, ProcessEvent};
pub use domain::entities::{DetectedFormat, Detection, ImageFormat, ProcessingStats};
pub use error::{DetectionError, DirectoryError, FileOperationError};
pub use infrastructure::fs::FormatDetector;
