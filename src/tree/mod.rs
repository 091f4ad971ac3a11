//! Directory tree walking logic
//!
//! `TreeWalker` does a depth-first scan of a directory and returns the whole
//! tree as a `TreeNode`. Hidden entries and `__pycache__` are skipped.
//! Symlinks are listed but never followed.

mod filter;
mod node;
mod utils;
mod walker;

// Re-export public types
pub use filter::{EXCLUDED_NAMES, is_excluded};
pub use node::{NO_EXTENSION, TreeNode, UNKNOWN_EXTENSION, compare_nodes, sort_children};
pub use utils::{extension_of, file_info, format_size};
pub use walker::{TreeWalker, scan};
