//! The site build pipeline

use crate::Result;
use polyglot_config::{SiteConfig, Validate};
use polyglot_files::{PassthroughCopier, reset_output_dir};
use polyglot_handlebars::{RendererConfig, SiteRenderer, TemplateEngine};
use polyglot_i18n::{LoadedCatalogs, LocaleCode, MergeReport, load_catalogs, write_manifests};
use polyglot_log::info;
use std::time::{Duration, Instant};

/// What a finished build produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Locale codes, sorted
    pub locales: Vec<String>,
    /// Pages rendered
    pub templates: usize,
    /// HTML documents written
    pub artifacts: usize,
    /// Static files copied
    pub static_files: usize,
    /// Locale manifests written
    pub manifests: usize,
    /// Keys backfilled from the default locale, over all locales
    pub backfills: usize,
    /// Wall time of the build
    pub duration: Duration,
}

/// Result of a dry run: catalogs loaded and templates compiled, nothing written.
#[derive(Debug, Clone)]
pub struct CheckReport {
    /// Locale codes, sorted
    pub locales: Vec<String>,
    /// Pages that compiled
    pub templates: usize,
    /// One merge report per non-default locale
    pub reports: Vec<MergeReport>,
}

impl CheckReport {
    /// Total number of backfilled keys
    pub fn backfills(&self) -> usize {
        self.reports.iter().map(MergeReport::backfill_count).sum()
    }
}

/// Builds a site from a [`SiteConfig`].
///
/// Steps run in a fixed order and the first failure aborts the build:
/// catalogs, components, output reset, static copy, manifests, pages.
#[derive(Debug, Clone)]
pub struct SiteBuilder {
    config: SiteConfig,
}

impl SiteBuilder {
    /// Create a builder. The configuration is validated on `build`/`check`.
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    /// Get configuration
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Load and merge every catalog.
    pub fn load_catalogs(&self) -> Result<LoadedCatalogs> {
        let default_locale = LocaleCode::parse(&self.config.default_locale)?;
        Ok(load_catalogs(&self.config.locales_dir, &default_locale)?)
    }

    fn engine(&self) -> Result<TemplateEngine> {
        let mut renderer = RendererConfig::new(&self.config.templates_dir)
            .with_extension(self.config.template_extension.as_str())
            .with_strict_mode(self.config.strict_mode)
            .with_sanitizer(self.config.sanitizer.clone());
        if let Some(dir) = &self.config.components_dir {
            renderer = renderer.with_components_dir(dir);
        }
        Ok(TemplateEngine::new(renderer)?)
    }

    /// Run the full build.
    pub fn build(&self) -> Result<BuildSummary> {
        let started = Instant::now();
        self.config.validate()?;

        let catalogs = self.load_catalogs()?;
        let engine = self.engine()?;

        let output_dir = &self.config.output_dir;
        reset_output_dir(output_dir)?;

        let copier = PassthroughCopier::new(&self.config.static_exclude)?;
        let copied = copier.copy(&self.config.templates_dir, output_dir)?;

        let manifests = write_manifests(&catalogs, output_dir)?;

        let mut renderer = SiteRenderer::new(engine, &catalogs, output_dir);
        let rendered = renderer.render_all()?;

        let summary = BuildSummary {
            locales: catalogs.locales().map(ToString::to_string).collect(),
            templates: rendered.templates,
            artifacts: rendered.artifacts.len(),
            static_files: copied.copied.len(),
            manifests: manifests.len(),
            backfills: catalogs.backfill_count(),
            duration: started.elapsed(),
        };

        info!(
            target: "polyglot::build",
            "Built {} page(s) in {} locale(s) into {} ({} files, {:?})",
            summary.templates,
            summary.locales.len(),
            output_dir.display(),
            summary.artifacts + summary.static_files + summary.manifests,
            summary.duration
        );

        Ok(summary)
    }

    /// Load catalogs and compile every page without writing anything.
    pub fn check(&self) -> Result<CheckReport> {
        self.config.validate()?;

        let catalogs = self.load_catalogs()?;
        let mut engine = self.engine()?;

        let pages = engine.pages().to_vec();
        for page in &pages {
            engine.compile(page)?;
        }

        Ok(CheckReport {
            locales: catalogs.locales().map(ToString::to_string).collect(),
            templates: pages.len(),
            reports: catalogs.reports().to_vec(),
        })
    }
}
