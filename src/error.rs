//! Error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop a run.
///
/// Scanning itself never fails; only producing the artifact can.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot serialize report data: {0}")]
    Payload(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
