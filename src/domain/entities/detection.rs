//! Detection result entity
//!
//! The outcome of classifying a file header against the signature set.

use super::file_signature::ImageFormat;

/// A recognised image format together with its display label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectedFormat {
    format: ImageFormat,
    label: &'static str,
}

impl DetectedFormat {
    /// Creates a detected format with the given label
    pub fn new(format: ImageFormat, label: &'static str) -> Self {
        Self { format, label }
    }

    /// Returns the recognised format
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Returns the canonical extension, without the dot
    pub fn extension(&self) -> &'static str {
        self.format.extension()
    }

    /// Returns the type label, which may name a sub-variant such as APNG
    pub fn label(&self) -> &'static str {
        self.label
    }
}

/// Result of classifying a file header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    /// The header matched a known signature
    Recognized(DetectedFormat),
    /// No signature matched; carries the first 8 header bytes as uppercase hex
    Unrecognized { header_hex: String },
    /// Fewer than the minimum number of bytes could be read
    TooShort,
}

impl Detection {
    /// Returns the detected format, if any
    pub fn detected(&self) -> Option<&DetectedFormat> {
        match self {
            Detection::Recognized(detected) => Some(detected),
            _ => None,
        }
    }

    /// Returns the canonical extension of the detected format, if any
    pub fn extension(&self) -> Option<&'static str> {
        self.detected().map(DetectedFormat::extension)
    }

    /// Returns the header hex dump kept for diagnostics
    pub fn debug_hex(&self) -> Option<&str> {
        match self {
            Detection::Unrecognized { header_hex } => Some(header_hex),
            _ => None,
        }
    }

    /// Whether the header was recognised
    pub fn is_recognized(&self) -> bool {
        matches!(self, Detection::Recognized(_))
    }
}
