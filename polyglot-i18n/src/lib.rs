//! Locale Catalogs for Polyglot
//!
//! Loads one JSON translation catalog per locale, completes every catalog
//! against the default locale's key schema, and indexes the locales so pages
//! can link to each other.
//!
//! - **Loading**: `<dir>/<locale>.json`, the default locale is required
//! - **Fallback merge**: missing keys are copied from the default and reported
//! - **Locale index**: every catalog gets `data.locales` with the code and
//!   display name of each locale
//! - **Manifests**: resolved catalogs are written as JSON for client use
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use polyglot_i18n::{CatalogLoader, LocaleCode};
//!
//! # fn main() -> polyglot_i18n::Result<()> {
//! let loaded = CatalogLoader::new("locales", LocaleCode::parse("en")?).load()?;
//!
//! for report in loaded.reports() {
//!     for key in report.backfilled() {
//!         println!("{} is missing {}", report.locale(), key);
//!     }
//! }
//!
//! let de = loaded.get(&LocaleCode::parse("de")?).unwrap();
//! println!("{:?}", de.get_text("nav.home"));
//! # Ok(())
//! # }
//! ```

mod catalog;
mod error;
pub mod index;
mod loader;
mod locale;
pub mod manifest;
mod merge;

pub use catalog::{Catalog, CatalogValue};
pub use error::I18nError;
pub use index::{LocaleIndex, LocaleInfo};
pub use loader::{CATALOG_EXTENSION, CatalogLoader, LoadedCatalogs, load_catalogs};
pub use locale::LocaleCode;
pub use manifest::{manifest_path, write_manifests};
pub use merge::{MergeDiagnostic, MergeReport, merge_onto_default};

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, I18nError>;
