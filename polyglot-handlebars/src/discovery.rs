//! Template discovery
//!
//! Walks the templates directory in sorted order. Files whose name starts
//! with `_` are partials: they are never rendered as pages but can be
//! included from any template under their relative name.

use crate::error::Result;
use crate::TemplateError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A template file found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    /// Absolute (or root-joined) path of the file
    pub path: PathBuf,
    /// Path relative to the templates root, extension included
    pub relative: PathBuf,
    /// Registry name: relative path, `/`-separated, without extension
    pub name: String,
}

impl TemplateSource {
    fn new(root: &Path, path: &Path) -> Self {
        let relative = path.strip_prefix(root).unwrap_or(path).to_path_buf();
        let name = relative
            .with_extension("")
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        Self {
            path: path.to_path_buf(),
            relative,
            name,
        }
    }

    /// True if the file name starts with `_`
    pub fn is_partial(&self) -> bool {
        self.relative
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with('_'))
    }

    /// File stem, used as the name of components
    pub fn stem(&self) -> String {
        self.relative
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Templates under one root, split into pages and partials.
#[derive(Debug, Clone, Default)]
pub struct DiscoveredTemplates {
    /// Templates rendered once per locale
    pub pages: Vec<TemplateSource>,
    /// `_`-prefixed templates, only reachable as partials
    pub partials: Vec<TemplateSource>,
}

/// Configurable template walk.
#[derive(Debug, Clone)]
pub struct TemplateDiscovery {
    root: PathBuf,
    extension: String,
    skip_dirs: Vec<PathBuf>,
}

impl TemplateDiscovery {
    /// Discover files with `extension` (no dot) under `root`
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
            skip_dirs: Vec::new(),
        }
    }

    /// Do not descend into `dir`
    pub fn skip_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.skip_dirs.push(dir.into());
        self
    }

    /// Walk the root. Pages and partials come back sorted by path.
    pub fn discover(&self) -> Result<DiscoveredTemplates> {
        if !self.root.is_dir() {
            return Err(TemplateError::DirectoryNotFound(self.root.clone()));
        }

        let mut found = DiscoveredTemplates::default();
        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !self.skip_dirs.iter().any(|skip| e.path() == skip));

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file()
                || entry
                    .path()
                    .extension()
                    .is_none_or(|ext| ext != self.extension.as_str())
            {
                continue;
            }

            let source = TemplateSource::new(&self.root, entry.path());
            if source.is_partial() {
                found.partials.push(source);
            } else {
                found.pages.push(source);
            }
        }

        Ok(found)
    }
}

/// Discover templates under `root` with the given extension.
pub fn discover_templates(root: impl AsRef<Path>, extension: &str) -> Result<DiscoveredTemplates> {
    TemplateDiscovery::new(root.as_ref(), extension).discover()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x").unwrap();
    }

    #[test]
    fn test_discover_sorted_and_split() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "index.hbs");
        touch(root, "about.hbs");
        touch(root, "blog/post.hbs");
        touch(root, "blog/_sidebar.hbs");
        touch(root, "_layout.hbs");
        touch(root, "style.css");

        let found = discover_templates(root, "hbs").unwrap();
        let pages: Vec<_> = found.pages.iter().map(|t| t.name.as_str()).collect();
        let partials: Vec<_> = found.partials.iter().map(|t| t.name.as_str()).collect();

        assert_eq!(pages, vec!["about", "blog/post", "index"]);
        assert_eq!(partials, vec!["_layout", "blog/_sidebar"]);
        assert_eq!(found.pages[1].relative, PathBuf::from("blog/post.hbs"));
    }

    #[test]
    fn test_skip_dir() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "index.hbs");
        touch(root, "components/nav.hbs");

        let found = TemplateDiscovery::new(root, "hbs")
            .skip_dir(root.join("components"))
            .discover()
            .unwrap();
        assert_eq!(found.pages.len(), 1);
        assert_eq!(found.pages[0].name, "index");
    }

    #[test]
    fn test_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let err = discover_templates(temp_dir.path().join("nope"), "hbs").unwrap_err();
        assert!(matches!(err, TemplateError::DirectoryNotFound(_)));
    }

    #[test]
    fn test_stem() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "nav/language-switcher.hbs");
        let found = discover_templates(temp_dir.path(), "hbs").unwrap();
        assert_eq!(found.pages[0].stem(), "language-switcher");
    }
}
