//! Output path resolution

use polyglot_i18n::LocaleCode;
use std::path::{Component, Path, PathBuf};

/// Extension of rendered documents.
pub const OUTPUT_EXTENSION: &str = "html";

/// Maps template paths to artifact paths under an output root.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    root: PathBuf,
}

impl OutputPaths {
    /// Create a resolver for `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The output root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Artifact paths for one template in one locale.
    ///
    /// Always `<root>/<locale>/<relative>.html`; for the default locale
    /// `<root>/<relative>.html` follows.
    pub fn resolve(
        &self,
        relative: &Path,
        locale: &LocaleCode,
        default_locale: &LocaleCode,
    ) -> Vec<PathBuf> {
        let document = relative.with_extension(OUTPUT_EXTENSION);
        let mut paths = vec![self.root.join(locale.as_str()).join(&document)];
        if locale == default_locale {
            paths.push(self.root.join(&document));
        }
        paths
    }
}

/// Directory of a template relative to the root, as a URL prefix.
///
/// `""` for root templates, otherwise the directory with a trailing `/`.
pub fn relative_url(relative: &Path) -> String {
    let Some(parent) = relative.parent() else {
        return String::new();
    };

    parent
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(format!("{}/", s.to_string_lossy())),
            _ => None,
        })
        .collect()
}
