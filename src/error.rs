//! Build errors

use polyglot_config::ConfigError;
use polyglot_files::FilesError;
use polyglot_handlebars::TemplateError;
use polyglot_i18n::I18nError;
use thiserror::Error;

/// Result type for site builds
pub type Result<T> = std::result::Result<T, BuildError>;

/// Any failure that aborts a build.
///
/// The wrapped error is exposed through `source()` so callers can print the
/// full chain.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("invalid configuration")]
    Config(#[from] ConfigError),

    #[error("failed to load locale catalogs")]
    Catalog(#[from] I18nError),

    #[error("failed to render templates")]
    Template(#[from] TemplateError),

    #[error("failed to write site files")]
    Files(#[from] FilesError),
}
