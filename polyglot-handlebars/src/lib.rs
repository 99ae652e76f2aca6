//! # Polyglot Handlebars
//!
//! Renders Handlebars pages once per locale against that locale's merged
//! catalog.
//!
//! ## Features
//!
//! - ✅ **Compile once** - Each page is compiled once, rendered per locale
//! - ✅ **Components** - Files in the components directory become partials
//! - ✅ **Partials** - `_`-prefixed templates are included, never rendered
//! - ✅ **Helpers** - `t`, `sanitize`, `markdown`, `eq`, `ne`, `not`
//! - ✅ **Default locale copy** - Default locale pages also land unprefixed
//!
//! ## Helpers
//!
//! | Helper | Output |
//! |--------|--------|
//! | `{{t "nav.home"}}` | Translated text, HTML-escaped; the key itself if missing |
//! | `{{sanitize "intro"}}` | Translated HTML filtered through the tag allowlist |
//! | `{{markdown "about.body"}}` | Translated Markdown as HTML, placeholder if empty |
//! | `{{#if (eq a b)}}` | Equality, with `ne` and `not` |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use polyglot_handlebars::{RendererConfig, SiteRenderer, TemplateEngine};
//! use polyglot_i18n::{LocaleCode, load_catalogs};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalogs = load_catalogs("src/locales", &LocaleCode::parse("en")?)?;
//! let engine = TemplateEngine::new(
//!     RendererConfig::new("src/templates").with_components_dir("src/components"),
//! )?;
//!
//! let mut renderer = SiteRenderer::new(engine, &catalogs, "dist");
//! let report = renderer.render_all()?;
//! println!("{} pages, {} files", report.templates, report.artifacts.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod helpers;
pub mod markdown;
pub mod output;
pub mod render;

pub use config::RendererConfig;
pub use discovery::{DiscoveredTemplates, TemplateDiscovery, TemplateSource, discover_templates};
pub use engine::TemplateEngine;
pub use error::{Result, TemplateError};
pub use markdown::render_markdown;
pub use output::{OutputPaths, relative_url};
pub use render::{RenderReport, SiteRenderer, render_context};
