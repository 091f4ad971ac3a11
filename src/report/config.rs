//! Report configuration types

use crate::stats::TOP_EXTENSIONS;

const DEFAULT_TITLE: &str = "Codebase Map";
const DEFAULT_COLLAPSE_DEPTH: usize = 2;

/// Configuration for the generated HTML report.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub title: String,
    /// Directories nested deeper than this start collapsed.
    pub collapse_depth: usize,
    /// Number of extensions in the bar chart.
    pub top_extensions: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            collapse_depth: DEFAULT_COLLAPSE_DEPTH,
            top_extensions: TOP_EXTENSIONS,
        }
    }
}
