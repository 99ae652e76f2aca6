//! End-to-end site builds

use polyglot::{BuildError, SiteBuilder, SiteConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn site() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let src = temp_dir.path().join("src");

    write(
        &src.join("locales/en.json"),
        r###"{
            "locale": {"name": "English"},
            "greeting": "Hello",
            "intro": "<p>Welcome <em>friend</em><img src=x onerror=alert(1)></p>",
            "about": {"body": "## About\n\nWe *translate* things.\n"}
        }"###,
    );
    write(&src.join("locales/de.json"), r#"{"locale": {"name": "Deutsch"}}"#);
    write(
        &src.join("components/switcher.hbs"),
        r#"<ul>{{#each data.locales}}<li><a href="/{{code}}/{{../relativeUrl}}">{{name}}</a></li>{{/each}}</ul>"#,
    );
    write(
        &src.join("templates/index.hbs"),
        r#"<html lang="{{locale.code}}">{{> switcher}}<h1>{{t "greeting"}}</h1>{{sanitize "intro"}}{{markdown "about.body"}}</html>"#,
    );
    write(
        &src.join("templates/docs/_note.hbs"),
        r#"<aside>{{t "greeting"}}</aside>"#,
    );
    write(&src.join("templates/docs/start.hbs"), r#"{{> docs/_note}}"#);
    write(&src.join("templates/css/site.css"), "h1 { color: teal }\n");

    temp_dir
}

fn config(root: &Path) -> SiteConfig {
    let mut config = SiteConfig::default();
    config.resolve_paths(root);
    config
}

#[test]
fn test_build_writes_every_artifact() {
    let temp_dir = site();
    let root = temp_dir.path();
    let summary = SiteBuilder::new(config(root)).build().unwrap();

    assert_eq!(summary.locales, vec!["de", "en"]);
    assert_eq!(summary.templates, 2);
    assert_eq!(summary.artifacts, 6);
    assert_eq!(summary.static_files, 1);
    assert_eq!(summary.manifests, 2);

    let dist = root.join("dist");
    let mut files: Vec<PathBuf> = walk(&dist)
        .into_iter()
        .map(|p| p.strip_prefix(&dist).unwrap().to_path_buf())
        .collect();
    files.sort();
    let expected: Vec<PathBuf> = [
        "css/site.css",
        "de/docs/start.html",
        "de/index.html",
        "docs/start.html",
        "en/docs/start.html",
        "en/index.html",
        "index.html",
        "resources/locales/de.json",
        "resources/locales/en.json",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();
    assert_eq!(files, expected);

    assert_eq!(
        fs::read(dist.join("en/index.html")).unwrap(),
        fs::read(dist.join("index.html")).unwrap()
    );
    assert_eq!(
        fs::read_to_string(dist.join("css/site.css")).unwrap(),
        "h1 { color: teal }\n"
    );
}

#[test]
fn test_german_page_falls_back_to_default() {
    let temp_dir = site();
    let root = temp_dir.path();
    let summary = SiteBuilder::new(config(root)).build().unwrap();

    // greeting, intro and about are missing from de
    assert_eq!(summary.backfills, 3);

    let de = fs::read_to_string(root.join("dist/de/index.html")).unwrap();
    assert!(de.starts_with(r#"<html lang="de">"#));
    assert!(de.contains("<h1>Hello</h1>"));
    assert!(de.contains("<p>Welcome <em>friend</em></p>"));
    assert!(!de.contains("onerror"));
    assert!(de.contains("<h2>About</h2>"));
    assert!(de.contains("<em>translate</em>"));
    assert!(de.contains(r#"<li><a href="/de/">Deutsch</a></li><li><a href="/en/">English</a></li>"#));

    let start = fs::read_to_string(root.join("dist/de/docs/start.html")).unwrap();
    assert_eq!(start, "<aside>Hello</aside>");
}

#[test]
fn test_manifest_contains_resolved_catalog() {
    let temp_dir = site();
    let root = temp_dir.path();
    SiteBuilder::new(config(root)).build().unwrap();

    let manifest: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(root.join("dist/resources/locales/de.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(manifest["greeting"], "Hello");
    assert_eq!(manifest["locale"]["code"], "de");
    assert_eq!(manifest["data"]["locales"]["en"]["name"], "English");
}

#[test]
fn test_rebuild_clears_stale_output() {
    let temp_dir = site();
    let root = temp_dir.path();
    write(&root.join("dist/old.html"), "stale");

    SiteBuilder::new(config(root)).build().unwrap();

    assert!(!root.join("dist/old.html").exists());
}

#[test]
fn test_check_reports_backfills_without_writing() {
    let temp_dir = site();
    let root = temp_dir.path();
    let report = SiteBuilder::new(config(root)).check().unwrap();

    assert_eq!(report.templates, 2);
    assert_eq!(report.backfills(), 3);
    assert_eq!(report.reports[0].locale().as_str(), "de");
    assert!(!root.join("dist").exists());
}

#[test]
fn test_missing_default_catalog_aborts() {
    let temp_dir = site();
    let root = temp_dir.path();
    fs::remove_file(root.join("src/locales/en.json")).unwrap();

    let err = SiteBuilder::new(config(root)).build().unwrap_err();
    assert!(matches!(err, BuildError::Catalog(_)));
    assert!(!root.join("dist").exists());
}

#[test]
fn test_template_syntax_error_aborts() {
    let temp_dir = site();
    let root = temp_dir.path();
    write(&root.join("src/templates/broken.hbs"), "{{#each items}}unclosed");

    let err = SiteBuilder::new(config(root)).build().unwrap_err();
    assert!(matches!(err, BuildError::Template(_)));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_output_enclosing_sources_is_rejected() {
    let temp_dir = site();
    let root = temp_dir.path();
    let mut config = config(root);
    config.output_dir = root.to_path_buf();

    let err = SiteBuilder::new(config).build().unwrap_err();
    assert!(matches!(err, BuildError::Config(_)));
    assert!(root.join("src/locales/en.json").is_file());
    assert!(root.join("src/templates/index.hbs").is_file());
}

#[test]
fn test_output_inside_templates_is_rejected() {
    let temp_dir = site();
    let root = temp_dir.path();
    let mut config = config(root);
    config.output_dir = root.join("src/templates/dist");

    let err = SiteBuilder::new(config).build().unwrap_err();
    assert!(matches!(err, BuildError::Config(_)));
    assert!(!root.join("src/templates/dist").exists());
}

fn walk(dir: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            out.extend(walk(&path));
        } else {
            out.push(path);
        }
    }
    out
}
