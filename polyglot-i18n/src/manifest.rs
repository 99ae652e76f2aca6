//! Locale manifests
//!
//! Each resolved catalog is published as JSON so client-side code can switch
//! locales without fetching every candidate catalog.

use crate::{LoadedCatalogs, Result};
use polyglot_log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Manifest directory, relative to the output root.
pub const MANIFEST_DIR: &str = "resources/locales";

/// Path of the manifest for `locale` under `output_root`.
pub fn manifest_path(output_root: &Path, locale: &str) -> PathBuf {
    output_root.join(MANIFEST_DIR).join(format!("{}.json", locale))
}

/// Write one manifest per locale. Returns the written paths in locale order.
pub fn write_manifests(catalogs: &LoadedCatalogs, output_root: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_root.join(MANIFEST_DIR))?;

    let mut written = Vec::with_capacity(catalogs.len());
    for catalog in catalogs.iter() {
        let path = manifest_path(output_root, catalog.locale().as_str());
        let json = serde_json::to_string_pretty(&catalog.to_json())?;
        fs::write(&path, json)?;
        debug!(target: "polyglot::i18n", "Wrote manifest {}", path.display());
        written.push(path);
    }

    Ok(written)
}
