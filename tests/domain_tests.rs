//! Domain layer unit tests
//!
//! Tests for entities and domain services.

use imgfix::domain::entities::{Detection, ImageFormat};
use imgfix::domain::services::{
    corrected_path, current_extension, extensions_equivalent, SignatureRegistry, HEADER_LEN,
};
use proptest::prelude::*;
use rstest::*;
use std::path::{Path, PathBuf};

const PNG: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

fn padded(prefix: &[u8]) -> Vec<u8> {
    let mut data = prefix.to_vec();
    data.resize(HEADER_LEN, 0);
    data
}

#[fixture]
fn registry() -> SignatureRegistry {
    SignatureRegistry::default_images()
}

// ============================================================================
// ImageFormat Tests
// ============================================================================

#[rstest]
#[case(ImageFormat::Png, "png")]
#[case(ImageFormat::Gif, "gif")]
#[case(ImageFormat::Jpeg, "jpg")]
#[case(ImageFormat::WebP, "webp")]
#[case(ImageFormat::Bmp, "bmp")]
fn test_image_format_extension(#[case] format: ImageFormat, #[case] expected: &str) {
    assert_eq!(format.extension(), expected);
}

// ============================================================================
// SignatureRegistry Tests
// ============================================================================

#[rstest]
#[case(&PNG, ImageFormat::Png, "PNG")]
#[case(b"GIF89a", ImageFormat::Gif, "GIF")]
#[case(b"GIF87a", ImageFormat::Gif, "GIF")]
#[case(&[0xFF, 0xD8, 0xFF, 0xE0], ImageFormat::Jpeg, "JPEG")]
#[case(b"RIFF\x24\x00\x00\x00WEBPVP8 ", ImageFormat::WebP, "WebP")]
#[case(b"BM\x36\x00\x0C\x00", ImageFormat::Bmp, "BMP")]
fn test_classify_known_signatures(
    registry: SignatureRegistry,
    #[case] prefix: &[u8],
    #[case] format: ImageFormat,
    #[case] label: &str,
) {
    let detection = registry.classify(&padded(prefix));
    let detected = detection.detected().expect("signature should match");
    assert_eq!(detected.format(), format);
    assert_eq!(detected.label(), label);
    assert_eq!(detection.extension(), Some(format.extension()));
}

#[rstest]
fn test_animated_png_label(registry: SignatureRegistry) {
    let mut header = PNG.to_vec();
    header.extend_from_slice(b"\x00\x00\x00\x0DIHDR\x00\x00\x00\x01acTL");
    let detection = registry.classify(&header);

    let detected = detection.detected().unwrap();
    assert_eq!(detected.label(), "APNG (animated)");
    assert_eq!(detected.extension(), "png");
}

#[rstest]
fn test_animation_chunk_outside_header_window_is_not_seen(registry: SignatureRegistry) {
    let mut header = padded(&PNG);
    header.extend_from_slice(b"acTL");
    let detection = registry.classify(&header);
    assert_eq!(detection.detected().unwrap().label(), "PNG");
}

#[rstest]
fn test_riff_without_webp_fourcc_is_unrecognized(registry: SignatureRegistry) {
    let detection = registry.classify(&padded(b"RIFF\x24\x00\x00\x00WAVE"));
    assert_eq!(
        detection,
        Detection::Unrecognized {
            header_hex: "5249464624000000".to_string()
        }
    );
}

#[rstest]
fn test_unrecognized_carries_uppercase_hex(registry: SignatureRegistry) {
    let detection = registry.classify(&[0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07]);
    assert!(!detection.is_recognized());
    assert_eq!(detection.debug_hex(), Some("0001020304050607"));

    let detection = registry.classify(&[0xAB, 0xCD, 0xEF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x11]);
    assert_eq!(detection.debug_hex(), Some("ABCDEF0000000000"));
}

#[rstest]
#[case(&[])]
#[case(&[0xFF, 0xD8, 0xFF])]
#[case(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A])]
fn test_short_headers_are_too_short(registry: SignatureRegistry, #[case] header: &[u8]) {
    let detection = registry.classify(header);
    assert_eq!(detection, Detection::TooShort);
    assert_eq!(detection.debug_hex(), None);
}

#[rstest]
fn test_earlier_signature_wins(registry: SignatureRegistry) {
    // "GIF89a" followed by RIFF/WEBP must still be a GIF
    let mut header = b"GIF89a\x00\x00WEBP".to_vec();
    header.resize(HEADER_LEN, 0);
    assert_eq!(
        registry.classify(&header).detected().map(|d| d.format()),
        Some(ImageFormat::Gif)
    );
}

proptest! {
    #[test]
    fn classification_only_depends_on_header_window(
        prefix in prop::collection::vec(any::<u8>(), HEADER_LEN),
        tail in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let registry = SignatureRegistry::default_images();
        let mut extended = prefix.clone();
        extended.extend_from_slice(&tail);

        prop_assert_eq!(registry.classify(&prefix), registry.classify(&extended));
    }

    #[test]
    fn known_magic_is_always_recognized(rest in prop::collection::vec(any::<u8>(), 0..24)) {
        let registry = SignatureRegistry::default_images();
        let mut header = PNG.to_vec();
        header.extend_from_slice(&rest);

        prop_assert_eq!(registry.classify(&header).extension(), Some("png"));
    }
}

// ============================================================================
// Naming Policy Tests
// ============================================================================

#[rstest]
#[case("photo.PNG", "png")]
#[case("photo.Jpeg", "jpeg")]
#[case("photo", "")]
#[case("archive.tar.gz", "gz")]
fn test_current_extension(#[case] name: &str, #[case] expected: &str) {
    assert_eq!(current_extension(Path::new(name)), expected);
}

#[rstest]
#[case("jpg", "jpg", true)]
#[case("jpeg", "jpg", true)]
#[case("jpg", "jpeg", false)]
#[case("png", "webp", false)]
#[case("", "bmp", false)]
fn test_extensions_equivalent(#[case] current: &str, #[case] detected: &str, #[case] expected: bool) {
    assert_eq!(extensions_equivalent(current, detected), expected);
}

#[rstest]
#[case("logo.png", "webp", Some("logo.webp"))]
#[case("image.jpeg", "jpg", None)]
#[case("photo.JPG", "jpg", None)]
#[case("photo.png", "png", None)]
#[case("shot.PNG", "gif", Some("shot.gif"))]
fn test_corrected_path(#[case] name: &str, #[case] detected: &str, #[case] expected: Option<&str>) {
    assert_eq!(
        corrected_path(Path::new(name), detected),
        expected.map(PathBuf::from)
    );
}
