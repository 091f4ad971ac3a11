//! Interactive HTML report
//!
//! The report is a single HTML file with everything inlined: the scanned tree
//! and precomputed statistics as JSON payloads, a fixed stylesheet, and a
//! script that renders the collapsible tree and the extension chart.
//!
//! # Module Structure
//!
//! - `config` - Report configuration
//! - `payload` - Serializable summary/meta payloads and script escaping
//! - `template` - Static CSS, markup and client script
//! - `html` - Assembles the final document

mod config;
mod html;
mod payload;
mod template;

use std::path::PathBuf;

use chrono::{DateTime, Local};

use crate::stats::{ScanSummary, summarize};
use crate::tree::TreeNode;

pub use config::ReportConfig;
pub use html::HtmlReporter;
pub use payload::{JsExtension, chart_bars, escape_json_for_script};

/// Everything the report displays.
#[derive(Debug, Clone)]
pub struct Report {
    /// Absolute path that was scanned.
    pub root: PathBuf,
    pub tree: TreeNode,
    pub summary: ScanSummary,
    pub generated_at: DateTime<Local>,
}

impl Report {
    /// Summarize `tree` and stamp it with the current time.
    pub fn new(root: PathBuf, tree: TreeNode) -> Self {
        let summary = summarize(&tree);
        Self {
            root,
            tree,
            summary,
            generated_at: Local::now(),
        }
    }
}
