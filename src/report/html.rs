//! HTML reporter: one self-contained page with the tree and summary embedded
//! as JSON and rendered client-side.

use crate::error::Result;

use super::Report;
use super::config::ReportConfig;
use super::payload::{JsMeta, JsStats, escape_json_for_script};
use super::template::{BODY, SCRIPT, STYLE};

/// Renders a [`Report`] into a standalone HTML document.
pub struct HtmlReporter {
    config: ReportConfig,
}

impl HtmlReporter {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, report: &Report) -> Result<String> {
        let data = serde_json::to_string(&report.tree)?;
        let stats = serde_json::to_string(&JsStats::new(
            &report.summary,
            self.config.top_extensions,
        ))?;
        let meta = serde_json::to_string(&JsMeta {
            title: self.config.title.clone(),
            root: report.root.display().to_string(),
            generated_at: report
                .generated_at
                .to_rfc3339_opts(chrono::SecondsFormat::Secs, false),
            collapse_depth: self.config.collapse_depth,
        })?;

        let mut html = String::with_capacity(8_192 + data.len());
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>");
        html.push_str(&escape_html(&self.config.title));
        html.push_str("</title>\n");
        html.push_str(STYLE);
        html.push_str("</head>\n");
        html.push_str(BODY);
        html.push_str("<script>\nconst DATA = ");
        html.push_str(&escape_json_for_script(&data));
        html.push_str(";\nconst STATS = ");
        html.push_str(&escape_json_for_script(&stats));
        html.push_str(";\nconst META = ");
        html.push_str(&escape_json_for_script(&meta));
        html.push_str(";\n</script>\n");
        html.push_str(SCRIPT);
        html.push_str("</body>\n</html>\n");
        Ok(html)
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
