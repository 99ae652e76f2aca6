// Environment variable overrides

use std::collections::HashMap;
use std::env;

/// Prefix of environment variables read by Polyglot.
pub const ENV_PREFIX: &str = "POLYGLOT";

/// Collects `<PREFIX>_*` variables as configuration overrides.
#[derive(Debug, Clone)]
pub struct EnvLoader {
    prefix: String,
}

impl EnvLoader {
    /// Create a loader for variables starting with `<prefix>_`
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Read the process environment
    pub fn load(&self) -> HashMap<String, String> {
        self.collect(env::vars())
    }

    /// Keep the prefixed variables, keyed by lowercased name without the
    /// prefix: `POLYGLOT_OUTPUT_DIR` becomes `output_dir`.
    pub fn collect(&self, vars: impl IntoIterator<Item = (String, String)>) -> HashMap<String, String> {
        vars.into_iter()
            .filter_map(|(key, value)| {
                let rest = key.strip_prefix(self.prefix.as_str())?.strip_prefix('_')?;
                (!rest.is_empty()).then(|| (rest.to_lowercase(), value))
            })
            .collect()
    }
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new(ENV_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_collect_strips_prefix() {
        let found = EnvLoader::default().collect(vars(&[
            ("POLYGLOT_OUTPUT_DIR", "public"),
            ("POLYGLOT_STRICT_MODE", "1"),
            ("POLYGLOTX_OUTPUT_DIR", "nope"),
            ("POLYGLOT_", "empty"),
            ("HOME", "/root"),
        ]));

        assert_eq!(found.len(), 2);
        assert_eq!(found["output_dir"], "public");
        assert_eq!(found["strict_mode"], "1");
    }

    #[test]
    fn test_custom_prefix() {
        let found = EnvLoader::new("SITE").collect(vars(&[
            ("SITE_DEFAULT_LOCALE", "de"),
            ("POLYGLOT_DEFAULT_LOCALE", "fr"),
        ]));
        assert_eq!(found.get("default_locale").map(String::as_str), Some("de"));
        assert_eq!(found.len(), 1);
    }
}
