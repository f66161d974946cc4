//! Error type for loading HAR files.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarError {
    /// The file could not be read (missing, permission denied, not UTF-8).
    #[error("read HAR file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not valid JSON, or has the wrong shape for a HAR document.
    #[error("JSON parse failed: {source}")]
    Parse {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },
}

impl HarError {
    /// True for decode failures, which the CLI reports on stdout instead of as a fatal error.
    pub fn is_parse(&self) -> bool {
        matches!(self, HarError::Parse { .. })
    }
}
