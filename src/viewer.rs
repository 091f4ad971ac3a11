//! Open the generated report with the system's default application

use std::path::Path;
use std::process::{Command, Stdio};

/// Launch the platform opener for `path` without waiting on it.
///
/// Failures are logged at debug level and otherwise ignored.
pub fn open_in_viewer(path: &Path) {
    let mut command = opener_command(path);
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    if let Err(e) = command.spawn() {
        tracing::debug!(path = %path.display(), error = %e, "could not launch viewer");
    }
}

#[cfg(target_os = "macos")]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(target_os = "windows")]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    // empty string is the window title `start` expects before the target
    command.args(["/C", "start", ""]).arg(path);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}
