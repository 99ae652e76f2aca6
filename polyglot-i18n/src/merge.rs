//! Fallback merging
//!
//! Every non-default catalog is completed against the default catalog's key
//! schema. Keys the target lacks are copied from the default and reported
//! once each; keys the target already has are never overwritten.

use crate::{Catalog, CatalogValue, LocaleCode};
use polyglot_log::warn;
use std::collections::BTreeMap;
use std::fmt;

/// One event recorded while merging a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeDiagnostic {
    /// Key was missing from the target and copied from the default.
    Backfilled { key_path: String },
    /// Key exists in both but one side is a string and the other a group.
    /// The target's value is kept.
    KindMismatch {
        key_path: String,
        default_kind: &'static str,
        target_kind: &'static str,
    },
}

impl MergeDiagnostic {
    /// The dotted key path this diagnostic refers to.
    pub fn key_path(&self) -> &str {
        match self {
            MergeDiagnostic::Backfilled { key_path } => key_path,
            MergeDiagnostic::KindMismatch { key_path, .. } => key_path,
        }
    }
}

/// Result of merging one locale onto the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    locale: LocaleCode,
    diagnostics: Vec<MergeDiagnostic>,
}

impl MergeReport {
    /// The merged locale.
    pub fn locale(&self) -> &LocaleCode {
        &self.locale
    }

    /// All diagnostics in walk order.
    pub fn diagnostics(&self) -> &[MergeDiagnostic] {
        &self.diagnostics
    }

    /// Key paths that were backfilled from the default.
    pub fn backfilled(&self) -> impl Iterator<Item = &str> {
        self.diagnostics.iter().filter_map(|d| match d {
            MergeDiagnostic::Backfilled { key_path } => Some(key_path.as_str()),
            MergeDiagnostic::KindMismatch { .. } => None,
        })
    }

    /// Number of backfilled keys.
    pub fn backfill_count(&self) -> usize {
        self.backfilled().count()
    }

    /// True if the locale matched the default schema exactly.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl fmt::Display for MergeDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeDiagnostic::Backfilled { key_path } => {
                write!(f, "missing key '{}', using default", key_path)
            }
            MergeDiagnostic::KindMismatch {
                key_path,
                default_kind,
                target_kind,
            } => write!(
                f,
                "key '{}' is {} in default but {} here, keeping translation",
                key_path, default_kind, target_kind
            ),
        }
    }
}

/// Merge `target` onto the schema of `default`, in place.
///
/// Each diagnostic is logged exactly once, here, as a warning naming the key
/// path and the target locale.
pub fn merge_onto_default(default: &Catalog, target: &mut Catalog) -> MergeReport {
    let mut diagnostics = Vec::new();
    let mut path = Vec::new();

    merge_maps(
        default.entries(),
        target.entries_mut(),
        &mut path,
        &mut diagnostics,
    );

    let locale = target.locale().clone();
    for diagnostic in &diagnostics {
        warn!(target: "polyglot::i18n", "[{}] {}", locale, diagnostic);
    }

    MergeReport {
        locale,
        diagnostics,
    }
}

fn merge_maps(
    default: &BTreeMap<String, CatalogValue>,
    target: &mut BTreeMap<String, CatalogValue>,
    path: &mut Vec<String>,
    diagnostics: &mut Vec<MergeDiagnostic>,
) {
    for (key, default_value) in default {
        path.push(key.clone());

        match target.get_mut(key) {
            None => {
                target.insert(key.clone(), default_value.clone());
                diagnostics.push(MergeDiagnostic::Backfilled {
                    key_path: path.join("."),
                });
            }
            Some(CatalogValue::Map(target_map)) => {
                if let CatalogValue::Map(default_map) = default_value {
                    merge_maps(default_map, target_map, path, diagnostics);
                } else {
                    diagnostics.push(MergeDiagnostic::KindMismatch {
                        key_path: path.join("."),
                        default_kind: default_value.kind(),
                        target_kind: "object",
                    });
                }
            }
            Some(CatalogValue::Text(_)) => {
                if let CatalogValue::Map(_) = default_value {
                    diagnostics.push(MergeDiagnostic::KindMismatch {
                        key_path: path.join("."),
                        default_kind: "object",
                        target_kind: "string",
                    });
                }
            }
        }

        path.pop();
    }
}
