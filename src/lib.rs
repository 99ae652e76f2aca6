//! # Polyglot
//!
//! Renders one tree of Handlebars templates into one HTML tree per locale.
//!
//! ```text
//! site/
//!   polyglot.toml
//!   src/locales/en.json         default locale, defines the key schema
//!   src/locales/de.json         missing keys fall back to en
//!   src/components/nav.hbs      {{> nav}} from any page
//!   src/templates/index.hbs     rendered per locale
//!   src/templates/css/site.css  copied as is
//!
//! dist/
//!   index.html                  default locale, unprefixed
//!   en/index.html
//!   de/index.html
//!   css/site.css
//!   resources/locales/en.json   resolved catalogs
//!   resources/locales/de.json
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use polyglot::{SiteBuilder, SiteConfig};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SiteConfig::load(Path::new("polyglot.toml"))?;
//! let summary = SiteBuilder::new(config).build()?;
//! println!("{} pages, {} backfilled keys", summary.templates, summary.backfills);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod error;

pub use builder::{BuildSummary, CheckReport, SiteBuilder};
pub use error::{BuildError, Result};

pub use polyglot_config::SiteConfig;

// Re-export member crates
pub use polyglot_config;
pub use polyglot_files;
pub use polyglot_handlebars;
pub use polyglot_i18n;
pub use polyglot_log;
pub use polyglot_xss;
