// Site configuration

use crate::{ConfigError, ConfigLoader, ConfigValidator, Result, Validate};
use polyglot_xss::SanitizerPolicy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "polyglot.toml";

/// Everything a site build needs to know.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory of `<locale>.json` catalogs
    pub locales_dir: PathBuf,
    /// Directory of page templates and static assets
    pub templates_dir: PathBuf,
    /// Directory of shared components
    pub components_dir: Option<PathBuf>,
    /// Output root, cleared at the start of every build
    pub output_dir: PathBuf,
    /// Locale whose catalog defines the key schema
    pub default_locale: String,
    /// Template file extension, without the dot
    pub template_extension: String,
    /// Glob patterns of files not copied to the output
    pub static_exclude: Vec<String>,
    /// Fail on missing template variables
    pub strict_mode: bool,
    /// Build log file, written in addition to stderr
    pub log_file: Option<PathBuf>,
    /// Allowlist for the `sanitize` helper
    pub sanitizer: SanitizerPolicy,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            locales_dir: PathBuf::from("src/locales"),
            templates_dir: PathBuf::from("src/templates"),
            components_dir: Some(PathBuf::from("src/components")),
            output_dir: PathBuf::from("dist"),
            default_locale: "en".to_string(),
            template_extension: "hbs".to_string(),
            static_exclude: vec!["**/*.hbs".to_string()],
            strict_mode: false,
            log_file: None,
            sanitizer: SanitizerPolicy::default(),
        }
    }
}

impl SiteConfig {
    /// Load from a TOML or JSON file, apply `POLYGLOT_*` overrides, resolve
    /// relative paths against the file's directory, and validate.
    pub fn load(path: &Path) -> Result<Self> {
        let value = ConfigLoader::auto(path)?.load_file(path)?;
        let mut config: SiteConfig = serde_json::from_value(value)
            .map_err(|e| ConfigError::DeserializationError(e.to_string()))?;

        config.apply_env(&crate::EnvLoader::default().load())?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        config.resolve_paths(base);
        config.validate()?;
        Ok(config)
    }

    /// Override scalar fields from environment values keyed by field name.
    ///
    /// Unknown keys are ignored. An empty value clears an optional path.
    pub fn apply_env(&mut self, vars: &HashMap<String, String>) -> Result<()> {
        for (key, value) in vars {
            match key.as_str() {
                "locales_dir" => self.locales_dir = PathBuf::from(value),
                "templates_dir" => self.templates_dir = PathBuf::from(value),
                "components_dir" => self.components_dir = optional_path(value),
                "output_dir" => self.output_dir = PathBuf::from(value),
                "default_locale" => self.default_locale = value.clone(),
                "template_extension" => self.template_extension = value.clone(),
                "log_file" => self.log_file = optional_path(value),
                "strict_mode" => self.strict_mode = parse_bool(key, value)?,
                _ => {}
            }
        }
        Ok(())
    }

    /// Join every relative path onto `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        let join = |p: &Path| {
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                base.join(p)
            }
        };

        self.locales_dir = join(&self.locales_dir);
        self.templates_dir = join(&self.templates_dir);
        self.output_dir = join(&self.output_dir);
        self.components_dir = self.components_dir.as_deref().map(join);
        self.log_file = self.log_file.as_deref().map(join);
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        ConfigValidator::path_not_empty(&self.locales_dir, "locales_dir")?;
        ConfigValidator::path_not_empty(&self.templates_dir, "templates_dir")?;
        ConfigValidator::path_not_empty(&self.output_dir, "output_dir")?;
        ConfigValidator::disjoint_paths(
            &self.output_dir,
            &self.templates_dir,
            "output_dir",
            "templates_dir",
        )?;
        ConfigValidator::disjoint_paths(
            &self.output_dir,
            &self.locales_dir,
            "output_dir",
            "locales_dir",
        )?;
        if let Some(components_dir) = &self.components_dir {
            ConfigValidator::disjoint_paths(
                &self.output_dir,
                components_dir,
                "output_dir",
                "components_dir",
            )?;
        }
        ConfigValidator::is_locale_code(&self.default_locale, "default_locale")?;
        ConfigValidator::not_empty(&self.template_extension, "template_extension")?;
        for pattern in &self.static_exclude {
            ConfigValidator::is_glob(pattern, "static_exclude")?;
        }
        ConfigValidator::list_not_empty(&self.sanitizer.allowed_tags, "sanitizer.allowed_tags")?;
        Ok(())
    }
}

fn optional_path(value: &str) -> Option<PathBuf> {
    (!value.is_empty()).then(|| PathBuf::from(value))
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::ValidationError(format!(
            "{} must be a boolean, got '{}'",
            key, value
        ))),
    }
}
