//! Handlebars registry wrapper

use crate::discovery::{DiscoveredTemplates, TemplateDiscovery, TemplateSource};
use crate::{Result, TemplateError, config::RendererConfig, helpers};
use handlebars::Handlebars;
use polyglot_log::{debug, warn};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Handlebars registry set up for a site: helpers, components and
/// `_`-prefixed partials are registered on creation, pages are compiled
/// on demand.
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
    config: RendererConfig,
    templates: DiscoveredTemplates,
}

impl TemplateEngine {
    /// Create the engine, register helpers and partials, and discover pages
    pub fn new(config: RendererConfig) -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(config.strict_mode);
        helpers::register_builtin_helpers(&mut handlebars, &config.sanitizer);

        let mut discovery = TemplateDiscovery::new(&config.templates_dir, &config.template_extension);
        if let Some(dir) = &config.components_dir {
            discovery = discovery.skip_dir(dir);
        }
        let templates = discovery.discover()?;

        let mut engine = Self {
            handlebars,
            config,
            templates,
        };

        match engine.config.components_dir.clone() {
            Some(dir) if dir.is_dir() => {
                engine.register_components(&dir)?;
            }
            Some(dir) => debug!(
                target: "polyglot::render",
                "No components directory at {}",
                dir.display()
            ),
            None => {}
        }

        for partial in engine.templates.partials.clone() {
            engine.register_partial_file(&partial.name, &partial)?;
        }

        debug!(
            target: "polyglot::render",
            "Discovered {} page(s) and {} partial(s) in {}",
            engine.templates.pages.len(),
            engine.templates.partials.len(),
            engine.config.templates_dir.display()
        );

        Ok(engine)
    }

    /// Register every component file in `dir` as a partial named by its stem.
    ///
    /// Returns the number of components registered.
    pub fn register_components(&mut self, dir: &Path) -> Result<usize> {
        let components = TemplateDiscovery::new(dir, &self.config.template_extension).discover()?;

        let mut seen = HashSet::new();
        let mut count = 0;
        for component in components.pages.iter().chain(&components.partials) {
            let name = component.stem();
            if !seen.insert(name.clone()) {
                warn!(
                    target: "polyglot::render",
                    "Component '{}' defined more than once, using {}",
                    name,
                    component.relative.display()
                );
            }
            self.register_partial_file(&name, component)?;
            count += 1;
        }

        debug!(target: "polyglot::render", "Registered {} component(s)", count);
        Ok(count)
    }

    fn register_partial_file(&mut self, name: &str, source: &TemplateSource) -> Result<()> {
        let content =
            fs::read_to_string(&source.path).map_err(|e| TemplateError::io(&source.path, e))?;
        self.register_partial(name, &content)
    }

    /// Register a partial from a string
    pub fn register_partial(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_partial(name, template)
            .map_err(|source| TemplateError::Compile {
                name: name.to_string(),
                source: Box::new(source),
            })
    }

    /// Compile a page template and register it under its name
    pub fn compile(&mut self, template: &TemplateSource) -> Result<()> {
        let content = fs::read_to_string(&template.path)
            .map_err(|e| TemplateError::io(&template.path, e))?;
        self.register_template(&template.name, &content)
    }

    /// Compile a template from a string
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|source| TemplateError::Compile {
                name: name.to_string(),
                source: Box::new(source),
            })
    }

    /// Render a compiled template with data
    pub fn render<T: Serialize>(&self, name: &str, locale: &str, data: &T) -> Result<String> {
        if !self.handlebars.has_template(name) {
            return Err(TemplateError::TemplateNotFound(name.to_string()));
        }

        self.handlebars
            .render(name, data)
            .map_err(|source| TemplateError::Render {
                name: name.to_string(),
                locale: locale.to_string(),
                source: Box::new(source),
            })
    }

    /// Check if a template is compiled
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }

    /// Pages found under the templates directory, sorted
    pub fn pages(&self) -> &[TemplateSource] {
        &self.templates.pages
    }

    /// Partials found under the templates directory, sorted
    pub fn partials(&self) -> &[TemplateSource] {
        &self.templates.partials
    }

    /// Get configuration
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }
}
