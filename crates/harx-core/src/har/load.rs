//! Read a HAR file from disk.

use std::fs;
use std::path::Path;

use crate::error::HarError;

use super::parse::HarDocument;

/// Reads the whole file as UTF-8 and parses it.
///
/// The file is read fully and closed before decoding starts; nothing is
/// streamed.
pub fn load(path: &Path) -> Result<HarDocument, HarError> {
    let raw = fs::read_to_string(path).map_err(|source| HarError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let doc: HarDocument = serde_json::from_str(&raw).map_err(|source| HarError::Parse {
        path: Some(path.to_path_buf()),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        entries = doc.entries().len(),
        "loaded HAR"
    );
    Ok(doc)
}
