//! Merge diagnostics reach the build log once each, naming key and locale.

use polyglot::polyglot_log::{Level, close_log_file, set_level, set_log_file};
use polyglot::{SiteBuilder, SiteConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_single_warning_per_merge_diagnostic() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("src/locales")).unwrap();
    fs::create_dir_all(root.join("src/templates")).unwrap();
    fs::write(
        root.join("src/locales/en.json"),
        r#"{"greeting": "Hello", "footer": "Imprint"}"#,
    )
    .unwrap();
    fs::write(
        root.join("src/locales/de.json"),
        r#"{"footer": {"short": "Impressum"}}"#,
    )
    .unwrap();
    fs::write(
        root.join("src/templates/index.hbs"),
        r#"{{t "greeting"}} {{t "footer.short"}}"#,
    )
    .unwrap();

    let mut config = SiteConfig {
        components_dir: None,
        ..SiteConfig::default()
    };
    config.resolve_paths(root);

    let log = root.join("build.log");
    set_level(Level::Info);
    set_log_file(&log).unwrap();
    let summary = SiteBuilder::new(config).build().unwrap();
    close_log_file();

    assert_eq!(summary.backfills, 1);
    assert_eq!(
        fs::read_to_string(root.join("dist/de/index.html")).unwrap(),
        "Hello Impressum"
    );

    let content = fs::read_to_string(&log).unwrap();
    let warnings: Vec<_> = content
        .lines()
        .filter(|line| line.contains("WARN") && line.contains("greeting"))
        .collect();
    assert_eq!(warnings.len(), 1, "log was:\n{content}");
    assert!(warnings[0].contains("[de]"));

    let mismatches: Vec<_> = content
        .lines()
        .filter(|line| line.contains("WARN") && line.contains("'footer'"))
        .collect();
    assert_eq!(mismatches.len(), 1, "log was:\n{content}");
    assert!(mismatches[0].contains("[de]"));
    assert!(mismatches[0].contains("keeping translation"));
}
