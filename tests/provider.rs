//! File-backed theme source tests

mod common;

use common::*;
use tempfile::TempDir;
use theme_tweaker::provider::{ActivePath, FileThemeSource, ProviderError, ThemeSource};
use theme_tweaker::theme::ThemeDocument;

#[test]
fn test_load_active_file() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(dir.path(), "theme.json");

    let source = FileThemeSource::new(path);
    let doc = source.load().unwrap();
    assert_eq!(doc.metadata.id, "kav");
    assert_eq!(doc.dark["accent"], "#4DA3FF");
}

#[test]
fn test_load_missing_file_is_error() {
    let dir = TempDir::new().unwrap();
    let source = FileThemeSource::new(dir.path().join("missing.json"));
    assert!(matches!(source.load(), Err(ProviderError::Read { .. })));
}

#[test]
fn test_save_writes_backup_and_pretty_json() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(dir.path(), "theme.json");
    let source = FileThemeSource::new(path.clone());

    let mut doc = source.load().unwrap();
    doc.dark.insert("bg".into(), "#000000".into());
    source.save(&doc).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.ends_with("}\n"));
    assert!(written.contains("\n  \"dark\": {"));
    assert_eq!(ThemeDocument::from_json(&written).unwrap(), doc);

    let backups: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|name| name.starts_with("theme.json.bak."))
        .collect();
    assert_eq!(backups.len(), 1);
    let backup = std::fs::read_to_string(dir.path().join(&backups[0])).unwrap();
    assert_eq!(backup, SAMPLE_THEME);
}

#[test]
fn test_save_preserves_unknown_keys() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(dir.path(), "theme.json");
    let source = FileThemeSource::new(path.clone());

    source.save(&source.load().unwrap()).unwrap();
    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["variants"], serde_json::json!(["soft", "hard"]));
    assert_eq!(written["sourceDir"], "themes/kav");
}

#[test]
fn test_set_path_validates() {
    let dir = TempDir::new().unwrap();
    let good = write_sample(dir.path(), "good.json");
    std::fs::write(dir.path().join("notes.txt"), "hello").unwrap();
    std::fs::write(dir.path().join("broken.json"), "{\"dark\": 1}").unwrap();

    let source = FileThemeSource::new(dir.path().join("missing.json"));

    let missing = dir.path().join("nope.json");
    assert!(matches!(
        source.set(&missing.to_string_lossy()),
        Err(ProviderError::NotAFile(_))
    ));
    let txt = dir.path().join("notes.txt");
    assert!(matches!(
        source.set(&txt.to_string_lossy()),
        Err(ProviderError::NotJson(_))
    ));
    let broken = dir.path().join("broken.json");
    assert!(matches!(
        source.set(&broken.to_string_lossy()),
        Err(ProviderError::Parse(_))
    ));
    // Failed switches leave the active path alone
    assert!(source.get().ends_with("missing.json"));

    let effective = source
        .set(&format!("  {}  ", good.to_string_lossy()))
        .unwrap();
    assert_eq!(effective, good.to_string_lossy());
    assert_eq!(source.get(), effective);
}

#[test]
fn test_list_candidates_skips_hidden_and_invalid() {
    let dir = TempDir::new().unwrap();
    write_sample(dir.path(), "b/theme.json");
    write_sample(dir.path(), "a/nested/theme.JSON");
    write_sample(dir.path(), ".git/theme.json");
    std::fs::write(dir.path().join("package.json"), "{\"name\": \"x\"}").unwrap();

    let source = FileThemeSource::new(dir.path().join("b/theme.json"))
        .with_scan_roots(vec![dir.path().to_path_buf(), dir.path().join("b")]);
    let found = source.list_candidates().unwrap();

    let relative: Vec<String> = found
        .iter()
        .map(|p| {
            p.strip_prefix(&*dir.path().to_string_lossy())
                .unwrap_or(p)
                .replace('\\', "/")
        })
        .collect();
    assert_eq!(relative, ["/a/nested/theme.JSON", "/b/theme.json"]);
}

#[test]
fn test_upload_stores_sanitized_name() {
    let dir = TempDir::new().unwrap();
    let uploads = dir.path().join("uploads");
    let source = FileThemeSource::new(dir.path().join("theme.json")).with_uploads_dir(uploads.clone());

    let stored = source.upload("../../ocean", SAMPLE_THEME).unwrap();
    assert_eq!(stored, uploads.join("ocean.json").to_string_lossy());

    // Same name again does not overwrite
    let second = source.upload("ocean.json", SAMPLE_THEME).unwrap();
    assert_ne!(second, stored);
    assert!(second.ends_with("-ocean.json"));
}

#[test]
fn test_upload_rejects_invalid_content() {
    let dir = TempDir::new().unwrap();
    let uploads = dir.path().join("uploads");
    let source = FileThemeSource::new(dir.path().join("theme.json")).with_uploads_dir(uploads.clone());

    assert!(matches!(
        source.upload("x.json", "not json"),
        Err(ProviderError::Parse(_))
    ));
    assert!(!uploads.join("x.json").exists());

    let no_dir = FileThemeSource::new(dir.path().join("theme.json"));
    assert!(matches!(
        no_dir.upload("x.json", SAMPLE_THEME),
        Err(ProviderError::NoUploadsDir)
    ));
}
