//! Scan statistics
//!
//! A single reduction over a scanned tree: file and directory counts, total
//! bytes, and a histogram of file extensions.

use std::collections::HashMap;

use serde::Serialize;

use crate::tree::TreeNode;

/// Number of extensions shown in the report's bar chart.
pub const TOP_EXTENSIONS: usize = 5;

/// Occurrence count for one extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionCount {
    pub ext: String,
    pub count: usize,
}

/// Extension -> file count, remembering first-encountered order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionHistogram {
    entries: Vec<ExtensionCount>,
    index: HashMap<String, usize>,
}

impl ExtensionHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, ext: &str) {
        match self.index.get(ext) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.index.insert(ext.to_string(), self.entries.len());
                self.entries.push(ExtensionCount {
                    ext: ext.to_string(),
                    count: 1,
                });
            }
        }
    }

    /// Entries in first-encountered order.
    pub fn entries(&self) -> &[ExtensionCount] {
        &self.entries
    }

    /// The `n` most common extensions, count descending.
    ///
    /// Ties keep first-encountered order (the sort is stable).
    pub fn top(&self, n: usize) -> Vec<ExtensionCount> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted.truncate(n);
        sorted
    }
}

/// Aggregate statistics for a scanned tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub files: usize,
    /// Directories below the root; the root itself is not counted.
    pub directories: usize,
    pub total_bytes: u64,
    pub extensions: ExtensionHistogram,
}

/// Compute statistics for `tree` with a depth-first pass.
pub fn summarize(tree: &TreeNode) -> ScanSummary {
    let mut summary = ScanSummary::default();
    match tree {
        TreeNode::Dir { children, .. } => {
            for child in children {
                accumulate(child, &mut summary);
            }
        }
        TreeNode::File { .. } => accumulate(tree, &mut summary),
    }
    summary
}

fn accumulate(node: &TreeNode, summary: &mut ScanSummary) {
    match node {
        TreeNode::File { size, ext, .. } => {
            summary.files += 1;
            summary.total_bytes += size;
            summary.extensions.record(ext);
        }
        TreeNode::Dir { children, .. } => {
            summary.directories += 1;
            for child in children {
                accumulate(child, summary);
            }
        }
    }
}
