//! Scanned tree node types

use std::cmp::Ordering;

use serde::Serialize;

/// Extension recorded for files that have no extension.
pub const NO_EXTENSION: &str = "no-ext";

/// Extension recorded for files whose metadata could not be read.
pub const UNKNOWN_EXTENSION: &str = "unknown";

/// A single entry in the scanned tree.
///
/// Serializes with an internal `type` tag (`"dir"` or `"file"`), which is the
/// shape the embedded report script consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    File { name: String, size: u64, ext: String },
    Dir { name: String, children: Vec<TreeNode> },
}

impl TreeNode {
    pub fn file(name: impl Into<String>, size: u64, ext: impl Into<String>) -> Self {
        TreeNode::File {
            name: name.into(),
            size,
            ext: ext.into(),
        }
    }

    /// Build a directory node, sorting `children` into display order.
    pub fn dir(name: impl Into<String>, mut children: Vec<TreeNode>) -> Self {
        sort_children(&mut children);
        TreeNode::Dir {
            name: name.into(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Dir { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }

    /// Children of a directory; empty for files.
    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::Dir { children, .. } => children,
            TreeNode::File { .. } => &[],
        }
    }
}

/// Directories before files, then case-insensitive name, then raw name.
pub fn compare_nodes(a: &TreeNode, b: &TreeNode) -> Ordering {
    b.is_dir()
        .cmp(&a.is_dir())
        .then_with(|| a.name().to_lowercase().cmp(&b.name().to_lowercase()))
        .then_with(|| a.name().cmp(b.name()))
}

pub fn sort_children(children: &mut [TreeNode]) {
    children.sort_by(compare_nodes);
}
