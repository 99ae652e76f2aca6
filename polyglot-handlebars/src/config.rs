//! Configuration for the template renderer

use polyglot_xss::SanitizerPolicy;
use std::path::PathBuf;

/// Configuration for [`TemplateEngine`](crate::TemplateEngine)
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Directory containing localized templates
    pub templates_dir: PathBuf,

    /// Directory of shared components, registered as partials
    pub components_dir: Option<PathBuf>,

    /// Template file extension, without the dot (default: "hbs")
    pub template_extension: String,

    /// Error on missing variables instead of rendering nothing
    pub strict_mode: bool,

    /// Allowlist used by the `sanitize` helper
    pub sanitizer: SanitizerPolicy,
}

impl RendererConfig {
    /// Create a new configuration with template directory
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
            components_dir: None,
            template_extension: "hbs".to_string(),
            strict_mode: false,
            sanitizer: SanitizerPolicy::default(),
        }
    }

    /// Set template file extension. A leading dot is ignored.
    pub fn with_extension(mut self, ext: impl Into<String>) -> Self {
        self.template_extension = ext.into().trim_start_matches('.').to_string();
        self
    }

    /// Set components directory
    pub fn with_components_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.components_dir = Some(dir.into());
        self
    }

    /// Enable strict mode (error on missing variables)
    pub fn with_strict_mode(mut self, enable: bool) -> Self {
        self.strict_mode = enable;
        self
    }

    /// Set the sanitizer policy
    pub fn with_sanitizer(mut self, policy: SanitizerPolicy) -> Self {
        self.sanitizer = policy;
        self
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self::new("templates")
    }
}
