//! TreeWalker - builds the full tree in memory

use std::fs::DirEntry;
use std::path::Path;

use super::filter::is_excluded;
use super::node::TreeNode;
use super::utils::file_info;

/// Depth-first walker that builds a [`TreeNode`] for a directory.
///
/// The walk is best-effort: unreadable directories become empty, unreadable
/// files get a degraded size/extension, and nothing is reported as an error.
#[derive(Debug, Default)]
pub struct TreeWalker;

impl TreeWalker {
    pub fn new() -> Self {
        Self
    }

    pub fn walk(&self, root: &Path) -> TreeNode {
        TreeNode::dir(root_name(root), self.read_children(root))
    }

    fn read_children(&self, path: &Path) -> Vec<TreeNode> {
        let entries = match std::fs::read_dir(path) {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "cannot read directory");
                return Vec::new();
            }
        };

        entries
            .filter_map(|e| e.ok())
            .filter_map(|entry| self.walk_entry(&entry))
            .collect()
    }

    fn walk_entry(&self, entry: &DirEntry) -> Option<TreeNode> {
        let name = entry.file_name().to_string_lossy().to_string();
        if is_excluded(&name) {
            tracing::debug!(name = %name, "skipping excluded entry");
            return None;
        }

        let entry_path = entry.path();

        // `file_type` does not follow symlinks, so a link to a directory is
        // listed as a file and never descended into.
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if is_dir {
            return Some(TreeNode::dir(name, self.read_children(&entry_path)));
        }

        let (size, ext) = file_info(&entry_path);
        Some(TreeNode::file(name, size, ext))
    }
}

/// Last path component, or the whole path when there is none (e.g. `/`).
fn root_name(root: &Path) -> String {
    root.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| root.display().to_string())
}

/// Scan `root` into a tree. Never fails; see [`TreeWalker`].
pub fn scan(root: &Path) -> TreeNode {
    TreeWalker::new().walk(root)
}
