//! Scan-and-report pipeline used by the binary

use std::path::{Component, Path, PathBuf};
use std::time::Instant;

use crate::error::{Error, Result};
use crate::report::{HtmlReporter, Report, ReportConfig};
use crate::tree::scan;

/// File name of the generated report.
pub const OUTPUT_FILE: &str = "codebase-map.html";

/// Resolve `path` against `cwd` into an absolute path.
///
/// `.` and `..` are folded lexically, so a symlinked root keeps the name it
/// was given instead of being replaced by its target.
pub fn resolve_root(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    let absolute = std::path::absolute(&joined).unwrap_or(joined);

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    resolved
}

/// Scan `root` and render the HTML report.
pub fn generate(root: &Path, config: ReportConfig) -> Result<String> {
    let started = Instant::now();
    let tree = scan(root);
    let report = Report::new(root.to_path_buf(), tree);
    tracing::info!(
        root = %root.display(),
        files = report.summary.files,
        directories = report.summary.directories,
        bytes = report.summary.total_bytes,
        elapsed = %humantime::format_duration(started.elapsed()),
        "scan complete"
    );
    HtmlReporter::new(config).render(&report)
}

/// Write `html` to [`OUTPUT_FILE`] in `dir`, replacing any existing file.
pub fn write_report(html: &str, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(OUTPUT_FILE);
    std::fs::write(&path, html).map_err(|source| Error::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
