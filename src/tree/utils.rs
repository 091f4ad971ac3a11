//! Shared utility functions for tree walking

use std::path::Path;

use super::node::{NO_EXTENSION, UNKNOWN_EXTENSION};

const SIZE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Lower-cased extension of `path` without the leading dot, or [`NO_EXTENSION`].
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| NO_EXTENSION.to_string())
}

/// Get size and extension for a file.
///
/// Follows symlinks. Any stat failure degrades to `(0, "unknown")`.
pub fn file_info(path: &Path) -> (u64, String) {
    match std::fs::metadata(path) {
        Ok(meta) => (meta.len(), extension_of(path)),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "cannot stat file");
            (0, UNKNOWN_EXTENSION.to_string())
        }
    }
}

/// Format a size in bytes to human-readable format.
///
/// Scales to the largest unit the value reaches (capped at GB) and rounds to
/// two decimals, dropping trailing zeros: `1536` is `"1.5 KB"`, `1048576` is
/// `"1 MB"`. The report script's `formatSize` uses the same steps.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut unit = 0;
    while unit + 1 < SIZE_UNITS.len() && bytes >= 1u64 << (10 * (unit + 1)) {
        unit += 1;
    }

    let scaled = bytes as f64 / (1u64 << (10 * unit)) as f64;
    let rounded = (scaled * 100.0).round() / 100.0;
    format!("{} {}", rounded, SIZE_UNITS[unit])
}
