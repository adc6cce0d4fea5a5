//! Signature registry service
//!
//! Holds the ordered collection of image signatures and classifies file
//! headers against it. Order matters: the first matching signature wins, so
//! long, specific magic numbers are registered before the weak RIFF and `BM`
//! prefixes.

use crate::domain::entities::{DetectedFormat, Detection, FileSignature, ImageFormat, LabelRule};
use memchr::memmem;

/// Number of header bytes read from each file
pub const HEADER_LEN: usize = 32;

/// Minimum number of bytes needed before any classification is attempted
pub const MIN_HEADER_LEN: usize = 8;

/// Bytes rendered as hex for unrecognised headers
const DEBUG_HEX_LEN: usize = 8;

const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
const GIF89A_MAGIC: &[u8] = b"GIF89a";
const GIF87A_MAGIC: &[u8] = b"GIF87a";
const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];
const RIFF_MAGIC: &[u8] = b"RIFF";
const WEBP_FOURCC: &[u8] = b"WEBP";
const BMP_MAGIC: &[u8] = b"BM";

/// Chunk tag that marks an animated PNG
const APNG_CHUNK: &[u8] = b"acTL";
const APNG_LABEL: &str = "APNG (animated)";

/// Ordered registry of image signatures
///
/// # Example
///
/// ```
/// use imgfix::domain::services::SignatureRegistry;
/// use imgfix::domain::entities::ImageFormat;
///
/// let registry = SignatureRegistry::default_images();
/// let jpeg = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];
/// let detection = registry.classify(&jpeg);
/// assert_eq!(detection.detected().map(|d| d.format()), Some(ImageFormat::Jpeg));
/// ```
#[derive(Debug, Clone)]
pub struct SignatureRegistry {
    signatures: Vec<FileSignature>,
}

impl SignatureRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            signatures: Vec::new(),
        }
    }

    /// Creates a registry with the supported image signatures in priority order
    pub fn default_images() -> Self {
        let mut registry = Self::new();

        registry.register(
            FileSignature::new(ImageFormat::Png, PNG_MAGIC)
                .with_label_rule(LabelRule::AnimatedPng),
        );
        registry.register(FileSignature::new(ImageFormat::Gif, GIF89A_MAGIC));
        registry.register(FileSignature::new(ImageFormat::Gif, GIF87A_MAGIC));
        registry.register(FileSignature::new(ImageFormat::Jpeg, JPEG_MAGIC));
        // RIFF....WEBP, the four bytes in between are the chunk size
        registry.register(
            FileSignature::new(ImageFormat::WebP, RIFF_MAGIC).with_secondary(8, WEBP_FOURCC),
        );
        registry.register(FileSignature::new(ImageFormat::Bmp, BMP_MAGIC));

        registry
    }

    /// Appends a signature with the lowest priority so far
    pub fn register(&mut self, signature: FileSignature) {
        self.signatures.push(signature);
    }

    /// Returns the registered signatures in priority order
    pub fn signatures(&self) -> &[FileSignature] {
        &self.signatures
    }

    /// Returns the number of registered signatures
    pub fn signature_count(&self) -> usize {
        self.signatures.len()
    }

    /// Classifies a file header
    ///
    /// Only the first [`HEADER_LEN`] bytes are considered. Headers shorter
    /// than [`MIN_HEADER_LEN`] yield [`Detection::TooShort`].
    pub fn classify(&self, header: &[u8]) -> Detection {
        let header = &header[..header.len().min(HEADER_LEN)];
        if header.len() < MIN_HEADER_LEN {
            return Detection::TooShort;
        }

        match self.signatures.iter().find(|sig| sig.matches(header)) {
            Some(sig) => Detection::Recognized(DetectedFormat::new(
                sig.format(),
                label_for(sig, header),
            )),
            None => Detection::Unrecognized {
                header_hex: hex::encode_upper(&header[..DEBUG_HEX_LEN]),
            },
        }
    }
}

impl Default for SignatureRegistry {
    fn default() -> Self {
        Self::default_images()
    }
}

fn label_for(signature: &FileSignature, header: &[u8]) -> &'static str {
    match signature.label_rule() {
        LabelRule::FormatName => signature.format().name(),
        LabelRule::AnimatedPng => {
            // Best effort: the chunk is only seen if it falls inside the header window
            let tail = header.get(PNG_MAGIC.len()..).unwrap_or_default();
            if memmem::find(tail, APNG_CHUNK).is_some() {
                APNG_LABEL
            } else {
                signature.format().name()
            }
        }
    }
}
