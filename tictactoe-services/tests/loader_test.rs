//! Tests for loading view configurations from files and selections

use std::fs;

use tictactoe_services::{PayloadError, ThemeLoader, ThemeSelection, ThemeSource};
use tictactoe_theme::interchange::to_json_string;
use tictactoe_theme::{GameViewConfig, ThemeError, ThemeRegistry};

#[test]
fn test_missing_file_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let err = ThemeLoader::load_from_file_blocking(&path).unwrap_err();
    match err {
        PayloadError::UnreadableSource { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_invalid_json_file_is_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{not json").unwrap();

    let err = ThemeLoader::load_from_file_blocking(&path).unwrap_err();
    assert!(matches!(err, PayloadError::Theme(ThemeError::MalformedConfig { .. })));
}

#[test]
fn test_exported_theme_loads_back() {
    let registry = ThemeRegistry::builtin();
    let enterprise = registry.get_theme("enterprise").unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("enterprise.json");
    fs::write(&path, to_json_string(&enterprise, true).unwrap()).unwrap();

    let loaded = smol::block_on(ThemeLoader::load_from_file(&path)).unwrap();
    assert_eq!(loaded, enterprise);
}

#[test]
fn test_toml_file_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.toml");
    fs::write(
        &path,
        "[fonts.status]\nsize = 18\nweight = \"bold\"\n\n[text]\nreset_button = \"Again\"\n",
    )
    .unwrap();

    let config = ThemeLoader::load_from_file_blocking(&path).unwrap();
    assert_eq!(config.fonts.status.size, 18);
    assert_eq!(config.fonts.status.weight.as_deref(), Some("bold"));
    assert_eq!(config.text.reset_button, "Again");
    assert_eq!(config.fonts.cell, GameViewConfig::default().fonts.cell);
}

#[test]
fn test_selection_resolves_explicit_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.json");
    fs::write(&path, r#"{"text": {"title": "From File"}}"#).unwrap();

    let registry = ThemeRegistry::builtin();
    let selection = ThemeSelection::new()
        .with_theme_file(&path)
        .with_theme_name("dark");
    assert_eq!(selection.source_with(|_| None), ThemeSource::File(path.clone()));

    let config = smol::block_on(selection.resolve(&registry)).unwrap();
    assert_eq!(config.text.title, "From File");
}

#[test]
fn test_resolve_or_default_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let selection = ThemeSelection::new().with_theme_file(dir.path().join("nope.json"));

    let config = smol::block_on(selection.resolve_or_default(&ThemeRegistry::builtin()));
    assert_eq!(config, GameViewConfig::default());
}
