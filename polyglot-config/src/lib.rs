// Configuration for Polyglot sites

pub mod env;
pub mod error;
pub mod loader;
pub mod site;
pub mod validation;

pub use env::{ENV_PREFIX, EnvLoader};
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat};
pub use site::{DEFAULT_CONFIG_FILE, SiteConfig};
pub use validation::{ConfigValidator, Validate};

use std::path::Path;

/// Load variables from a `.env` file into the process environment.
///
/// With no path, `.env` is looked up from the current directory and a
/// missing file is not an error.
pub fn load_dotenv(path: Option<&Path>) -> Result<()> {
    if let Some(path) = path {
        dotenvy::from_path(path).map_err(|e| ConfigError::LoadError(e.to_string()))?;
    } else {
        dotenvy::dotenv().ok();
    }
    Ok(())
}
