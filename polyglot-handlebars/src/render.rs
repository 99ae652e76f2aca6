//! Per-locale rendering of pages

use crate::discovery::TemplateSource;
use crate::output::{OutputPaths, relative_url};
use crate::{Result, TemplateEngine, TemplateError};
use polyglot_i18n::{Catalog, LoadedCatalogs};
use polyglot_log::{debug, info};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Context key holding the page's directory as a URL prefix.
pub const RELATIVE_URL_KEY: &str = "relativeUrl";

/// Build the data a page is rendered with for one locale.
///
/// This is the full catalog plus `relativeUrl`, which replaces any catalog
/// entry of the same name.
pub fn render_context(catalog: &Catalog, relative: &Path) -> Value {
    let mut context = catalog.to_json();
    if let Value::Object(map) = &mut context {
        map.insert(
            RELATIVE_URL_KEY.to_string(),
            Value::String(relative_url(relative)),
        );
    }
    context
}

/// What a render pass produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    /// Number of pages rendered
    pub templates: usize,
    /// Every file written, in write order
    pub artifacts: Vec<PathBuf>,
}

/// Renders pages for every loaded locale into an output tree.
pub struct SiteRenderer<'a> {
    engine: TemplateEngine,
    catalogs: &'a LoadedCatalogs,
    output: OutputPaths,
}

impl<'a> SiteRenderer<'a> {
    /// Create a renderer writing under `output_root`
    pub fn new(
        engine: TemplateEngine,
        catalogs: &'a LoadedCatalogs,
        output_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            engine,
            catalogs,
            output: OutputPaths::new(output_root),
        }
    }

    /// The underlying engine
    pub fn engine(&self) -> &TemplateEngine {
        &self.engine
    }

    /// Compile one page, then render and write it for each locale in order.
    ///
    /// Returns the written paths.
    pub fn render_template(&mut self, template: &TemplateSource) -> Result<Vec<PathBuf>> {
        self.engine.compile(template)?;

        let default_locale = self.catalogs.default_locale();
        let mut written = Vec::new();

        for catalog in self.catalogs.iter() {
            let locale = catalog.locale();
            let context = render_context(catalog, &template.relative);
            let html = self
                .engine
                .render(&template.name, locale.as_str(), &context)?;

            for path in self
                .output
                .resolve(&template.relative, locale, default_locale)
            {
                write_artifact(&path, &html)?;
                debug!(target: "polyglot::render", "Wrote {}", path.display());
                written.push(path);
            }
        }

        info!(
            target: "polyglot::render",
            "Rendered {} for {} locale(s)",
            template.name,
            self.catalogs.len()
        );
        Ok(written)
    }

    /// Render every discovered page
    pub fn render_all(&mut self) -> Result<RenderReport> {
        let pages = self.engine.pages().to_vec();
        let mut report = RenderReport::default();

        for page in &pages {
            let written = self.render_template(page)?;
            report.templates += 1;
            report.artifacts.extend(written);
        }

        Ok(report)
    }
}

fn write_artifact(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| TemplateError::io(parent, e))?;
    }
    fs::write(path, html).map_err(|e| TemplateError::io(path, e))
}
