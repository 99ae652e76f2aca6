//! Locale index
//!
//! Every catalog describes itself under `locale` (`code`, `name`). Once all
//! catalogs are loaded the descriptions are collected into a [`LocaleIndex`]
//! and written back into each catalog under `data.locales`, so any page can
//! render a language switcher.

use crate::{Catalog, CatalogValue};
use polyglot_log::warn;
use serde::Serialize;
use std::collections::BTreeMap;

/// Catalog key holding a locale's self-description.
pub const LOCALE_KEY: &str = "locale";
/// Key under [`LOCALE_KEY`] holding the locale code.
pub const CODE_KEY: &str = "code";
/// Key under [`LOCALE_KEY`] holding the display name.
pub const NAME_KEY: &str = "name";
/// Catalog key under which computed data is injected.
pub const DATA_KEY: &str = "data";
/// Key under [`DATA_KEY`] holding the locale index.
pub const LOCALES_KEY: &str = "locales";

/// Self-description of one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleInfo {
    /// Locale code
    pub code: String,
    /// Display name, in the locale's own language
    pub name: String,
}

/// Map from locale code to [`LocaleInfo`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocaleIndex {
    entries: BTreeMap<String, LocaleInfo>,
}

impl LocaleIndex {
    /// Collect the self-descriptions of the given catalogs.
    ///
    /// A catalog without `locale.name` is listed under its code.
    pub fn from_catalogs<'a>(catalogs: impl IntoIterator<Item = &'a Catalog>) -> Self {
        let entries = catalogs
            .into_iter()
            .map(|catalog| {
                let code = catalog.locale().to_string();
                let name = catalog
                    .get_path(&[LOCALE_KEY, NAME_KEY])
                    .and_then(CatalogValue::as_text)
                    .unwrap_or(&code)
                    .to_string();
                (code.clone(), LocaleInfo { code, name })
            })
            .collect();

        Self { entries }
    }

    /// Look up a locale.
    pub fn get(&self, code: &str) -> Option<&LocaleInfo> {
        self.entries.get(code)
    }

    /// Number of locales.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no locales are indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in code order.
    pub fn iter(&self) -> impl Iterator<Item = &LocaleInfo> {
        self.entries.values()
    }

    /// The index as a catalog subtree.
    pub fn to_catalog_value(&self) -> CatalogValue {
        CatalogValue::Map(
            self.entries
                .iter()
                .map(|(code, info)| {
                    let mut entry = BTreeMap::new();
                    entry.insert(CODE_KEY.to_string(), CatalogValue::Text(info.code.clone()));
                    entry.insert(NAME_KEY.to_string(), CatalogValue::Text(info.name.clone()));
                    (code.clone(), CatalogValue::Map(entry))
                })
                .collect(),
        )
    }

    /// Write the index into `catalog` under `data.locales`.
    pub fn inject(&self, catalog: &mut Catalog) {
        if let Some(CatalogValue::Text(_)) = catalog.entries().get(DATA_KEY) {
            warn!(
                target: "polyglot::i18n",
                "[{}] key '{}' is a string and will be replaced by computed locale data",
                catalog.locale(),
                DATA_KEY
            );
        }
        catalog.set_path(&[DATA_KEY, LOCALES_KEY], self.to_catalog_value());
    }
}

/// Set `locale.code` to the catalog's own code.
///
/// The code derived from the file name always wins over an authored one.
pub fn stamp_locale_code(catalog: &mut Catalog) {
    if let Some(CatalogValue::Text(_)) = catalog.entries().get(LOCALE_KEY) {
        warn!(
            target: "polyglot::i18n",
            "[{}] key '{}' is a string and will be replaced by locale metadata",
            catalog.locale(),
            LOCALE_KEY
        );
    }
    let code = CatalogValue::Text(catalog.locale().to_string());
    catalog.set_path(&[LOCALE_KEY, CODE_KEY], code);
}
