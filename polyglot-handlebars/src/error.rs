//! Error types for template rendering

use std::path::PathBuf;
use thiserror::Error;

/// Result type for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Errors that can occur while compiling or rendering templates
#[derive(Error, Debug)]
pub enum TemplateError {
    /// Template or components directory does not exist
    #[error("Template directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// Template source could not be compiled
    #[error("Failed to compile template '{name}': {source}")]
    Compile {
        name: String,
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    /// Template failed while rendering for a locale
    #[error("Failed to render template '{name}' for locale '{locale}': {source}")]
    Render {
        name: String,
        locale: String,
        #[source]
        source: Box<handlebars::RenderError>,
    },

    /// Template is not registered
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Reading a template or writing an artifact failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory walk failed
    #[error("Failed to walk template directory: {0}")]
    Walk(#[from] walkdir::Error),
}

impl TemplateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TemplateError::Io {
            path: path.into(),
            source,
        }
    }
}
