//! Error types for version file generation.

use std::path::PathBuf;

/// Generator error type.
///
/// Every variant is fatal. Git failures never show up here; they are
/// downgraded to default values by the inspector.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The `VERSION` file could not be read.
    #[error("unable to read version file {}", path.display())]
    ReadVersion {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The version template failed to render.
    #[error("error applying template")]
    Render(#[source] askama::Error),

    /// The output file could not be created or written.
    #[error("unable to create output version file {}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The process working directory could not be determined.
    #[error("unable to determine working directory")]
    CurrentDir(#[source] std::io::Error),
}

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, Error>;
