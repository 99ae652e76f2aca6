//! Error types for file operations

use std::path::PathBuf;
use thiserror::Error;

/// Result type for file operations
pub type Result<T> = std::result::Result<T, FilesError>;

/// Errors that can occur while copying site files
#[derive(Error, Debug)]
pub enum FilesError {
    /// Source directory does not exist
    #[error("Source directory not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// Exclusion pattern is not a valid glob
    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// Refusing to clear a filesystem root
    #[error("Refusing to reset output directory {}", .0.display())]
    UnsafeOutputDir(PathBuf),

    /// Filesystem operation failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory walk failed
    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),
}

impl FilesError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FilesError::Io {
            path: path.into(),
            source,
        }
    }
}
