//! Fixed exclusion rules for tree walking

/// Names that are never scanned, whether file or directory.
pub const EXCLUDED_NAMES: &[&str] = &["__pycache__"];

/// Check whether an entry name should be left out of the tree.
///
/// Hidden entries (leading `.`) and exact matches of [`EXCLUDED_NAMES`] are
/// skipped. Anything else is kept, including names such as `target` or
/// `node_modules`.
pub fn is_excluded(name: &str) -> bool {
    name.starts_with('.') || EXCLUDED_NAMES.contains(&name)
}
