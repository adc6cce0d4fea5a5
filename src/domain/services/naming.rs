//! Extension naming policy
//!
//! Decides whether a file's current extension agrees with its detected
//! format, and what the corrected name would be.

use std::path::{Path, PathBuf};

/// Returns the lower-cased extension of `path` without the leading dot,
/// or an empty string when there is none
pub fn current_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Whether a file carrying `current` already has the right extension for a
/// detected format whose canonical extension is `detected`
///
/// `jpeg` is accepted for `jpg`.
pub fn extensions_equivalent(current: &str, detected: &str) -> bool {
    current == detected || (current == "jpeg" && detected == "jpg")
}

/// Returns the path the file should be renamed to, or `None` when its
/// current name is already correct
pub fn corrected_path(path: &Path, detected: &str) -> Option<PathBuf> {
    if extensions_equivalent(&current_extension(path), detected) {
        return None;
    }

    let target = path.with_extension(detected);
    (target != path).then_some(target)
}
