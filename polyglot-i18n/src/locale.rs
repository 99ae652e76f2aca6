//! Locale codes
//!
//! A locale code names a catalog and the first path segment of its output
//! tree, so it is kept exactly as written in the catalog file name.

use crate::{I18nError, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A BCP-47-like locale tag such as `en`, `de`, `pt-BR` or `zh-Hant-TW`.
///
/// # Examples
///
/// ```
/// use polyglot_i18n::LocaleCode;
///
/// let code = LocaleCode::parse("pt-BR").unwrap();
/// assert_eq!(code.as_str(), "pt-BR");
/// assert_eq!(code.language(), "pt");
/// assert!(LocaleCode::parse("not a locale").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocaleCode(String);

impl LocaleCode {
    /// Parse and validate a locale code.
    ///
    /// Subtags are separated by `-` or `_`. The first subtag is a 2-3 letter
    /// language; every following subtag is 1-8 ASCII alphanumerics.
    pub fn parse(s: &str) -> Result<Self> {
        let mut subtags = s.split(['-', '_']);

        let language = subtags.next().unwrap_or_default();
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(I18nError::InvalidLocale(s.to_string()));
        }

        for subtag in subtags {
            if subtag.is_empty()
                || subtag.len() > 8
                || !subtag.chars().all(|c| c.is_ascii_alphanumeric())
            {
                return Err(I18nError::InvalidLocale(s.to_string()));
            }
        }

        Ok(Self(s.to_string()))
    }

    /// The code as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The language subtag.
    pub fn language(&self) -> &str {
        self.0.split(['-', '_']).next().unwrap_or(&self.0)
    }
}

impl FromStr for LocaleCode {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LocaleCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for LocaleCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
