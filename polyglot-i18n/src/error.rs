//! Error types for catalog operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or merging locale catalogs.
#[derive(Debug, Error)]
pub enum I18nError {
    /// Invalid locale code
    #[error("Invalid locale code: {0}")]
    InvalidLocale(String),

    /// The default locale has no catalog file
    #[error("Default locale catalog not found: {}", .path.display())]
    DefaultCatalogMissing { path: PathBuf },

    /// Catalog directory does not exist
    #[error("Catalog directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// Failed to read a catalog file
    #[error("Failed to read catalog {}: {source}", .path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a catalog file
    #[error("Failed to parse catalog {}: {source}", .path.display())]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Catalog contains a value that is neither a string nor an object
    #[error("Invalid value at '{key_path}' in locale {locale}: expected string or object, found {found}")]
    InvalidValue {
        locale: String,
        key_path: String,
        found: &'static str,
    },

    /// Catalog root is not an object
    #[error("Catalog for locale {0} must be a JSON object")]
    NotAnObject(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
