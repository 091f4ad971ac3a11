//! Codemap - scan a directory tree into a self-contained interactive HTML map

pub mod app;
pub mod error;
pub mod report;
pub mod stats;
pub mod tree;
pub mod viewer;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use app::{OUTPUT_FILE, generate, resolve_root, write_report};
pub use error::{Error, Result};
pub use report::{HtmlReporter, Report, ReportConfig};
pub use stats::{ExtensionCount, ExtensionHistogram, ScanSummary, TOP_EXTENSIONS, summarize};
pub use tree::{TreeNode, TreeWalker, format_size, scan};
pub use viewer::open_in_viewer;
