//! Integration tests for catalog loading and fallback merging

use polyglot_i18n::*;
use std::fs;
use tempfile::TempDir;

fn locales_dir(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for (name, content) in files {
        fs::write(temp_dir.path().join(name), content).unwrap();
    }
    temp_dir
}

#[test]
fn test_empty_german_catalog_gets_greeting() {
    let dir = locales_dir(&[("en.json", r#"{"greeting": "Hello"}"#), ("de.json", "{}")]);

    let loaded = load_catalogs(dir.path(), &LocaleCode::parse("en").unwrap()).unwrap();
    let de = LocaleCode::parse("de").unwrap();

    assert_eq!(loaded.get(&de).unwrap().get_text("greeting"), Some("Hello"));

    let report = &loaded.reports()[0];
    assert_eq!(report.locale(), &de);
    assert_eq!(
        report.diagnostics(),
        &[MergeDiagnostic::Backfilled {
            key_path: "greeting".to_string()
        }]
    );
}

#[test]
fn test_every_default_key_resolves_in_every_locale() {
    let dir = locales_dir(&[
        (
            "en.json",
            r#"{"title": "Site", "nav": {"home": "Home", "blog": "Blog"}, "footer": {"legal": {"imprint": "Imprint"}}}"#,
        ),
        ("de.json", r#"{"nav": {"home": "Start"}, "footer": {}}"#),
        ("fr.json", r#"{"title": "Site FR", "nav": {"home": "Accueil", "blog": "Blogue"}}"#),
    ]);

    let loaded = load_catalogs(dir.path(), &LocaleCode::parse("en").unwrap()).unwrap();
    let default = loaded.default_catalog().unwrap().clone();

    for catalog in loaded.iter() {
        for path in default.leaf_paths() {
            if path.starts_with("data.") {
                continue;
            }
            let value = catalog.get_text(&path);
            assert!(value.is_some(), "{} lacks {}", catalog.locale(), path);
        }
    }

    let fr = loaded.get(&LocaleCode::parse("fr").unwrap()).unwrap();
    assert_eq!(fr.get_text("nav.home"), Some("Accueil"));
    assert_eq!(fr.get_text("footer.legal.imprint"), Some("Imprint"));
}

#[test]
fn test_one_diagnostic_per_backfilled_key() {
    let dir = locales_dir(&[
        ("en.json", r#"{"a": "A", "b": {"c": "C", "d": "D"}, "e": "E"}"#),
        ("de.json", r#"{"b": {"c": "Ce"}}"#),
    ]);

    let loaded = load_catalogs(dir.path(), &LocaleCode::parse("en").unwrap()).unwrap();
    let report = &loaded.reports()[0];

    let mut backfilled: Vec<_> = report.backfilled().collect();
    backfilled.sort();
    assert_eq!(backfilled, vec!["a", "b.d", "e"]);
    assert_eq!(report.diagnostics().len(), 3);

    let de = loaded.get(&LocaleCode::parse("de").unwrap()).unwrap();
    for _ in 0..3 {
        assert_eq!(de.get_text("b.d"), Some("D"));
    }
    assert_eq!(loaded.backfill_count(), 3);
}
