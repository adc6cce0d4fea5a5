//! Format detector backed by the local filesystem
//!
//! Reads a bounded header from disk and classifies it with the signature
//! registry.

use super::header_reader::read_header;
use crate::domain::entities::Detection;
use crate::domain::services::{SignatureRegistry, HEADER_LEN};
use crate::error::DetectionError;
use std::path::Path;
use std::sync::Arc;

/// Detects the real image format of files on disk
#[derive(Debug, Clone)]
pub struct FormatDetector {
    registry: Arc<SignatureRegistry>,
}

impl FormatDetector {
    /// Creates a detector using the given registry
    pub fn new(registry: Arc<SignatureRegistry>) -> Self {
        Self { registry }
    }

    /// Creates a detector with the default image signatures
    pub fn with_default_signatures() -> Self {
        Self::new(Arc::new(SignatureRegistry::default_images()))
    }

    /// Returns the registry used for classification
    pub fn registry(&self) -> &SignatureRegistry {
        &self.registry
    }

    /// Reads the first [`HEADER_LEN`] bytes of `path` and classifies them
    pub async fn detect(&self, path: &Path) -> Result<Detection, DetectionError> {
        let header = read_header(path, HEADER_LEN)
            .await
            .map_err(|source| DetectionError {
                path: path.to_path_buf(),
                source,
            })?;

        let detection = self.registry.classify(&header);
        tracing::trace!(path = %path.display(), ?detection, "classified header");
        Ok(detection)
    }
}

impl Default for FormatDetector {
    fn default() -> Self {
        Self::with_default_signatures()
    }
}
