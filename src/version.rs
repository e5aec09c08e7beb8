//! Version information and the version file reader.

use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};

/// Placeholder hash used when the commit cannot be determined.
pub const UNKNOWN_HASH: &str = "UNKNOWN";

/// Values substituted into the generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    /// Trimmed contents of the version file.
    pub version: String,

    /// Whether the working tree had uncommitted changes.
    pub dirty: bool,

    /// Short commit hash, or [`UNKNOWN_HASH`].
    pub hash: String,
}

impl VersionInfo {
    /// Create version info with the conservative defaults: dirty, unknown hash.
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            dirty: true,
            hash: UNKNOWN_HASH.to_string(),
        }
    }
}

/// Read the version file and return its trimmed contents.
///
/// # Errors
///
/// Returns [`Error::ReadVersion`] if the file cannot be read.
pub fn read_version_file(path: &Path) -> Result<String> {
    let contents = std::fs::read_to_string(path).map_err(|source| Error::ReadVersion {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(contents.trim().to_string())
}
