//! Allowlist policy

use serde::{Deserialize, Serialize};

/// Which tags and attributes survive sanitization.
///
/// Names are compared case-insensitively. Anything not listed is removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizerPolicy {
    /// Element names allowed in output
    pub allowed_tags: Vec<String>,
    /// Attribute names allowed on any allowed element
    pub allowed_attributes: Vec<String>,
    /// Remove HTML comments
    pub strip_comments: bool,
}

impl Default for SanitizerPolicy {
    fn default() -> Self {
        Self {
            allowed_tags: [
                "a", "b", "br", "code", "em", "i", "li", "ol", "p", "small", "span", "strong",
                "sub", "sup", "ul",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            allowed_attributes: ["class", "href", "id", "lang", "target", "title"]
                .into_iter()
                .map(String::from)
                .collect(),
            strip_comments: true,
        }
    }
}

impl SanitizerPolicy {
    /// Policy with the given tags and attributes.
    pub fn new<T, A>(tags: T, attributes: A) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        Self {
            allowed_tags: tags.into_iter().map(Into::into).collect(),
            allowed_attributes: attributes.into_iter().map(Into::into).collect(),
            strip_comments: true,
        }
    }

    /// Set allowed HTML tags
    pub fn with_allowed_tags(mut self, tags: Vec<String>) -> Self {
        self.allowed_tags = tags;
        self
    }

    /// Set allowed attributes
    pub fn with_allowed_attributes(mut self, attributes: Vec<String>) -> Self {
        self.allowed_attributes = attributes;
        self
    }

    /// Set whether to strip HTML comments
    pub fn with_strip_comments(mut self, strip: bool) -> Self {
        self.strip_comments = strip;
        self
    }
}
