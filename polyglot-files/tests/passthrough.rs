//! Copying a template tree into an output directory

use polyglot_files::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_bytes(path: &Path, content: &[u8]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_copies_assets_and_skips_templates() {
    let temp_dir = TempDir::new().unwrap();
    let src = temp_dir.path().join("templates");
    let out = temp_dir.path().join("dist");

    let png = [0x89, b'P', b'N', b'G', 0x00, 0xff, 0x10];
    write_bytes(&src.join("index.hbs"), b"{{t \"greeting\"}}");
    write_bytes(&src.join("blog/_meta.hbs"), b"meta");
    write_bytes(&src.join("css/site.css"), b"body { margin: 0 }\n");
    write_bytes(&src.join("img/logo.png"), &png);
    write_bytes(&src.join("robots.txt"), b"User-agent: *\r\n");

    reset_output_dir(&out).unwrap();
    let report = PassthroughCopier::default().copy(&src, &out).unwrap();

    assert_eq!(
        report.copied,
        vec![
            PathBuf::from("css/site.css"),
            PathBuf::from("img/logo.png"),
            PathBuf::from("robots.txt"),
        ]
    );
    assert_eq!(report.skipped, 2);
    assert_eq!(fs::read(out.join("img/logo.png")).unwrap(), png);
    assert_eq!(fs::read(out.join("robots.txt")).unwrap(), b"User-agent: *\r\n");
    assert!(!out.join("index.hbs").exists());
    assert!(!out.join("blog").exists());
}

#[test]
fn test_reset_clears_previous_build() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("dist");
    write_bytes(&out.join("old/page.html"), b"stale");

    reset_output_dir(&out).unwrap();

    assert!(out.is_dir());
    assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
}

#[test]
fn test_missing_source() {
    let temp_dir = TempDir::new().unwrap();
    let err = PassthroughCopier::default()
        .copy(&temp_dir.path().join("nope"), temp_dir.path())
        .unwrap_err();
    assert!(matches!(err, FilesError::SourceNotFound(_)));
}
