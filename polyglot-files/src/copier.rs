//! Passthrough copy of non-template files

use crate::{FilesError, Result};
use glob::{MatchOptions, Pattern};
use polyglot_log::{debug, info};
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Exclusion applied when none is configured.
pub const DEFAULT_EXCLUDE: &str = "**/*.hbs";

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Summary of a copy pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    /// Copied files, relative to the source root
    pub copied: Vec<PathBuf>,
    /// Files skipped by an exclusion pattern
    pub skipped: usize,
    /// Total bytes copied
    pub bytes: u64,
}

/// Copies every file under a source tree that no exclusion pattern matches.
#[derive(Debug, Clone)]
pub struct PassthroughCopier {
    exclude: Vec<Pattern>,
}

impl PassthroughCopier {
    /// Create a copier with glob exclusion patterns.
    ///
    /// Patterns are matched against the `/`-separated path relative to the
    /// source root.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let exclude = patterns
            .into_iter()
            .map(|p| {
                let p = p.as_ref();
                Pattern::new(p).map_err(|source| FilesError::InvalidPattern {
                    pattern: p.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { exclude })
    }

    /// Check a relative path against the exclusion patterns
    pub fn is_excluded(&self, relative: &Path) -> bool {
        let relative = slash_path(relative);
        self.exclude
            .iter()
            .any(|p| p.matches_with(&relative, MATCH_OPTIONS))
    }

    /// Copy `src_root` into `out_root`, byte for byte.
    pub fn copy(&self, src_root: &Path, out_root: &Path) -> Result<CopyReport> {
        if !src_root.is_dir() {
            return Err(FilesError::SourceNotFound(src_root.to_path_buf()));
        }

        let mut report = CopyReport::default();

        for entry in WalkDir::new(src_root).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(src_root)
                .unwrap_or(entry.path())
                .to_path_buf();

            if self.is_excluded(&relative) {
                report.skipped += 1;
                continue;
            }

            let target = out_root.join(&relative);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| FilesError::io(parent, e))?;
            }
            let bytes = fs::copy(entry.path(), &target).map_err(|e| FilesError::io(&target, e))?;

            debug!(target: "polyglot::files", "Copied {}", relative.display());
            report.bytes += bytes;
            report.copied.push(relative);
        }

        info!(
            target: "polyglot::files",
            "Copied {} static file(s), skipped {}",
            report.copied.len(),
            report.skipped
        );
        Ok(report)
    }
}

impl Default for PassthroughCopier {
    fn default() -> Self {
        Self {
            exclude: Pattern::new(DEFAULT_EXCLUDE).into_iter().collect(),
        }
    }
}

/// Remove `out_root` if present and recreate it empty.
pub fn reset_output_dir(out_root: &Path) -> Result<()> {
    let has_name = out_root
        .components()
        .any(|c| matches!(c, Component::Normal(_)));
    if !has_name {
        return Err(FilesError::UnsafeOutputDir(out_root.to_path_buf()));
    }

    if out_root.exists() {
        fs::remove_dir_all(out_root).map_err(|e| FilesError::io(out_root, e))?;
    }
    fs::create_dir_all(out_root).map_err(|e| FilesError::io(out_root, e))?;

    debug!(target: "polyglot::files", "Reset {}", out_root.display());
    Ok(())
}

fn slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
