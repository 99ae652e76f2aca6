//! Error types for the Polyglot CLI.

use polyglot::BuildError;
use polyglot::polyglot_config::ConfigError;
use std::fmt;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug)]
pub enum CliError {
    /// Configuration could not be loaded
    Config(ConfigError),

    /// Build or check failed
    Build(BuildError),

    /// Log file could not be opened
    LogFile(std::io::Error),

    /// Check found problems the user asked to treat as errors
    Validation(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(_) => write!(f, "Configuration error"),
            CliError::Build(_) => write!(f, "Build failed"),
            CliError::LogFile(_) => write!(f, "Cannot open log file"),
            CliError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Build(e) => Some(e),
            CliError::LogFile(e) => Some(e),
            CliError::Validation(_) => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<BuildError> for CliError {
    fn from(e: BuildError) -> Self {
        CliError::Build(e)
    }
}

/// The error followed by each of its causes, outermost first.
pub fn error_chain(error: &dyn std::error::Error) -> Vec<String> {
    let mut chain = vec![error.to_string()];
    let mut source = error.source();
    while let Some(cause) = source {
        chain.push(cause.to_string());
        source = cause.source();
    }
    chain
}
