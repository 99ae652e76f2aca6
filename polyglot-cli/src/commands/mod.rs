//! CLI command implementations.

pub mod build;
pub mod check;

use crate::error::{CliError, CliResult};
use polyglot::SiteConfig;
use polyglot::polyglot_config::load_dotenv;
use std::path::Path;

/// Load `.env`, then the site configuration.
pub fn load_config(config_path: &Path, env_file: Option<&Path>) -> CliResult<SiteConfig> {
    load_dotenv(env_file)?;
    Ok(SiteConfig::load(config_path)?)
}

/// Start mirroring log output to the configured build log.
pub fn open_log_file(config: &SiteConfig) -> CliResult<()> {
    if let Some(path) = &config.log_file {
        polyglot_log::set_log_file(path).map_err(CliError::LogFile)?;
    }
    Ok(())
}
