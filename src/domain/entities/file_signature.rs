//! File signature entity
//!
//! Represents the magic bytes that identify an image format from the first
//! bytes of a file. This is the foundation of format sniffing.

use std::fmt;

/// Image formats that can be recognised from a file header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// PNG image format (static or animated)
    Png,
    /// GIF image format (87a or 89a)
    Gif,
    /// JPEG image format
    Jpeg,
    /// WebP image format (RIFF container)
    WebP,
    /// BMP image format
    Bmp,
}

impl ImageFormat {
    /// Every supported format, in detection priority order
    pub const ALL: [ImageFormat; 5] = [
        ImageFormat::Png,
        ImageFormat::Gif,
        ImageFormat::Jpeg,
        ImageFormat::WebP,
        ImageFormat::Bmp,
    ];

    /// Returns the canonical file extension for this format, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Gif => "gif",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::WebP => "webp",
            ImageFormat::Bmp => "bmp",
        }
    }

    /// Returns a human-readable name for this format
    pub fn name(&self) -> &'static str {
        match self {
            ImageFormat::Png => "PNG",
            ImageFormat::Gif => "GIF",
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::WebP => "WebP",
            ImageFormat::Bmp => "BMP",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How the human-readable label of a match is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelRule {
    /// Always use the format name
    FormatName,
    /// Look for an `acTL` chunk tag after the PNG magic to tell APNG apart
    AnimatedPng,
}

/// Bytes that must appear at a fixed offset in addition to the header prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecondaryMatch {
    offset: usize,
    bytes: &'static [u8],
}

impl SecondaryMatch {
    /// Creates a secondary match for `bytes` at `offset`
    pub const fn new(offset: usize, bytes: &'static [u8]) -> Self {
        Self { offset, bytes }
    }

    /// Returns the offset from the start of the header
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the expected bytes
    pub fn bytes(&self) -> &'static [u8] {
        self.bytes
    }

    fn matches(&self, data: &[u8]) -> bool {
        data.get(self.offset..self.offset + self.bytes.len()) == Some(self.bytes)
    }
}

/// A file signature: magic prefix, optional secondary bytes and a label rule
#[derive(Debug, Clone)]
pub struct FileSignature {
    format: ImageFormat,
    /// The header bytes (magic bytes at the start of the file)
    header: &'static [u8],
    secondary: Option<SecondaryMatch>,
    label_rule: LabelRule,
}

impl FileSignature {
    /// Creates a new file signature matching `header` at offset 0
    pub const fn new(format: ImageFormat, header: &'static [u8]) -> Self {
        Self {
            format,
            header,
            secondary: None,
            label_rule: LabelRule::FormatName,
        }
    }

    /// Requires `bytes` at `offset` in addition to the header prefix
    pub const fn with_secondary(mut self, offset: usize, bytes: &'static [u8]) -> Self {
        self.secondary = Some(SecondaryMatch::new(offset, bytes));
        self
    }

    /// Sets the rule used to label a match
    pub const fn with_label_rule(mut self, rule: LabelRule) -> Self {
        self.label_rule = rule;
        self
    }

    /// Returns the format this signature identifies
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Returns the header bytes
    pub fn header(&self) -> &'static [u8] {
        self.header
    }

    /// Returns the secondary match, if any
    pub fn secondary(&self) -> Option<SecondaryMatch> {
        self.secondary
    }

    /// Returns the label rule
    pub fn label_rule(&self) -> LabelRule {
        self.label_rule
    }

    /// Checks if the given data starts with this signature's header and,
    /// when present, carries the secondary bytes at their offset
    pub fn matches(&self, data: &[u8]) -> bool {
        data.starts_with(self.header) && self.secondary.is_none_or(|s| s.matches(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secondary_bytes_out_of_range_do_not_match() {
        let sig = FileSignature::new(ImageFormat::WebP, b"RIFF").with_secondary(8, b"WEBP");
        assert!(!sig.matches(b"RIFF\0\0\0\0WE"));
        assert!(sig.matches(b"RIFF\0\0\0\0WEBP"));
    }

    #[test]
    fn header_longer_than_data_does_not_match() {
        let sig = FileSignature::new(ImageFormat::Jpeg, &[0xFF, 0xD8, 0xFF]);
        assert!(!sig.matches(&[0xFF, 0xD8]));
    }
}
