//! Filesystem helper errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in the filesystem helpers.
#[derive(Debug, Error)]
pub enum FsError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A delete kept failing past the retry ceiling.
    #[error("timed out trying to remove {}", path.display())]
    Timeout {
        /// The file that could not be removed.
        path: PathBuf,
    },

    /// Archive parse or decompression error.
    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Archive entry resolving outside the destination directory.
    #[error("archive entry escapes destination: {name}")]
    InvalidEntry {
        /// Name of the offending entry.
        name: String,
    },
}

/// Result type for filesystem helpers.
pub type Result<T> = std::result::Result<T, FsError>;
