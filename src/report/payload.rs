//! JSON payloads embedded in the report

use serde::Serialize;

use crate::stats::{ExtensionCount, ScanSummary};
use crate::tree::format_size;

/// Page-level data for the report header and tree behaviour.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsMeta {
    pub title: String,
    pub root: String,
    pub generated_at: String,
    pub collapse_depth: usize,
}

/// One bar of the extension chart.
#[derive(Debug, PartialEq, Serialize)]
pub struct JsExtension {
    pub ext: String,
    pub count: usize,
    /// Bar width in pixels, relative to the largest displayed count.
    pub width: f64,
}

/// Summary panel data.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsStats {
    pub files: usize,
    pub directories: usize,
    pub total_bytes: u64,
    pub total_size: String,
    pub extensions: Vec<JsExtension>,
}

impl JsStats {
    pub fn new(summary: &ScanSummary, top_n: usize) -> Self {
        Self {
            files: summary.files,
            directories: summary.directories,
            total_bytes: summary.total_bytes,
            total_size: format_size(summary.total_bytes),
            extensions: chart_bars(&summary.extensions.top(top_n)),
        }
    }
}

/// Scale counts to bar widths; an empty selection gives no bars.
pub fn chart_bars(top: &[ExtensionCount]) -> Vec<JsExtension> {
    let Some(max) = top.iter().map(|e| e.count).max().filter(|&m| m > 0) else {
        return Vec::new();
    };

    top.iter()
        .filter(|e| e.count > 0)
        .map(|e| JsExtension {
            ext: e.ext.clone(),
            count: e.count,
            width: e.count as f64 / max as f64 * 100.0,
        })
        .collect()
}

/// Make serialized JSON safe to place inside a `<script>` element.
///
/// `<` only occurs inside JSON strings, where `<` decodes to the same
/// character, so no `</script>` or `<!--` can appear in the block.
pub fn escape_json_for_script(s: &str) -> String {
    s.replace('<', "\\u003c")
}
