//! Catalog loading
//!
//! Expected layout:
//!
//! ```text
//! locales/
//!   en.json      <- default locale, required
//!   de.json
//!   pt-BR.json
//! ```

use crate::index::{LocaleIndex, stamp_locale_code};
use crate::merge::{MergeReport, merge_onto_default};
use crate::{Catalog, I18nError, LocaleCode, Result};
use polyglot_log::{debug, info};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File extension of catalog files.
pub const CATALOG_EXTENSION: &str = "json";

/// Loads every catalog in a directory and completes them against the
/// default locale.
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    dir: PathBuf,
    default_locale: LocaleCode,
}

impl CatalogLoader {
    /// Create a loader for `dir` with the given default locale.
    pub fn new(dir: impl Into<PathBuf>, default_locale: LocaleCode) -> Self {
        Self {
            dir: dir.into(),
            default_locale,
        }
    }

    /// Path of the catalog file for a locale.
    pub fn catalog_path(&self, locale: &LocaleCode) -> PathBuf {
        self.dir
            .join(format!("{}.{}", locale.as_str(), CATALOG_EXTENSION))
    }

    /// Enumerate locale codes from catalog file names, sorted.
    pub fn discover_locales(&self) -> Result<Vec<LocaleCode>> {
        if !self.dir.is_dir() {
            return Err(I18nError::DirectoryNotFound(self.dir.clone()));
        }

        let mut locales = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().is_none_or(|ext| ext != CATALOG_EXTENSION) {
                continue;
            }

            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| I18nError::InvalidLocale(path.display().to_string()))?;
            locales.push(LocaleCode::parse(stem)?);
        }

        locales.sort();
        Ok(locales)
    }

    /// Read and parse one catalog file.
    pub fn read_catalog(&self, locale: &LocaleCode) -> Result<Catalog> {
        let path = self.catalog_path(locale);
        let content = fs::read_to_string(&path).map_err(|source| I18nError::CatalogRead {
            path: path.clone(),
            source,
        })?;
        let value = serde_json::from_str(&content)
            .map_err(|source| I18nError::CatalogParse { path, source })?;
        Catalog::from_json(locale.clone(), value)
    }

    /// Load, merge and index all catalogs.
    ///
    /// The default catalog is required. Any other catalog that fails to read
    /// or parse fails the whole load.
    pub fn load(&self) -> Result<LoadedCatalogs> {
        let locales = self.discover_locales()?;

        if !locales.contains(&self.default_locale) {
            return Err(I18nError::DefaultCatalogMissing {
                path: self.catalog_path(&self.default_locale),
            });
        }

        let mut default = self.read_catalog(&self.default_locale)?;
        stamp_locale_code(&mut default);
        debug!(
            target: "polyglot::i18n",
            "Loaded default catalog {} ({} keys)",
            self.default_locale,
            default.leaf_paths().len()
        );

        let mut catalogs = BTreeMap::new();
        for locale in locales.iter().filter(|l| **l != self.default_locale) {
            let mut catalog = self.read_catalog(locale)?;
            stamp_locale_code(&mut catalog);
            catalogs.insert(locale.clone(), catalog);
        }

        // Display names as authored, before `locale.name` can be backfilled.
        let index = LocaleIndex::from_catalogs(catalogs.values().chain([&default]));

        let mut reports = Vec::with_capacity(catalogs.len());
        for catalog in catalogs.values_mut() {
            let report = merge_onto_default(&default, catalog);
            debug!(
                target: "polyglot::i18n",
                "Merged catalog {} ({} backfilled)",
                catalog.locale(),
                report.backfill_count()
            );
            reports.push(report);
        }
        catalogs.insert(self.default_locale.clone(), default);

        for catalog in catalogs.values_mut() {
            index.inject(catalog);
        }

        info!(
            target: "polyglot::i18n",
            "Loaded {} locale(s), default {}",
            catalogs.len(),
            self.default_locale
        );

        Ok(LoadedCatalogs {
            default_locale: self.default_locale.clone(),
            catalogs,
            reports,
            index,
        })
    }
}

/// All catalogs of a build, merged and indexed. Read-only once loaded.
#[derive(Debug, Clone)]
pub struct LoadedCatalogs {
    default_locale: LocaleCode,
    catalogs: BTreeMap<LocaleCode, Catalog>,
    reports: Vec<MergeReport>,
    index: LocaleIndex,
}

impl LoadedCatalogs {
    /// The default locale.
    pub fn default_locale(&self) -> &LocaleCode {
        &self.default_locale
    }

    /// The default catalog.
    pub fn default_catalog(&self) -> Option<&Catalog> {
        self.catalogs.get(&self.default_locale)
    }

    /// Locale codes in sorted order.
    pub fn locales(&self) -> impl Iterator<Item = &LocaleCode> {
        self.catalogs.keys()
    }

    /// Catalogs in locale order.
    pub fn iter(&self) -> impl Iterator<Item = &Catalog> {
        self.catalogs.values()
    }

    /// Look up a catalog.
    pub fn get(&self, locale: &LocaleCode) -> Option<&Catalog> {
        self.catalogs.get(locale)
    }

    /// Number of locales.
    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    /// True if there are no catalogs.
    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }

    /// Merge reports, one per non-default locale.
    pub fn reports(&self) -> &[MergeReport] {
        &self.reports
    }

    /// Total number of backfilled keys across locales.
    pub fn backfill_count(&self) -> usize {
        self.reports.iter().map(MergeReport::backfill_count).sum()
    }

    /// The locale index.
    pub fn index(&self) -> &LocaleIndex {
        &self.index
    }
}

/// Convenience wrapper for [`CatalogLoader::load`].
pub fn load_catalogs(dir: impl AsRef<Path>, default_locale: &LocaleCode) -> Result<LoadedCatalogs> {
    CatalogLoader::new(dir.as_ref(), default_locale.clone()).load()
}
