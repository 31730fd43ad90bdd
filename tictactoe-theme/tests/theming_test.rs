//! Tests for bundled themes, lookup and JSON round-trips

use serde_json::json;
use tictactoe_theme::codegen::{render, sanitize_identifier};
use tictactoe_theme::interchange::{deserialize, from_json_str, serialize, to_json_string};
use tictactoe_theme::{GameViewConfig, TextConfig, ThemeError, ThemeRegistry};

#[test]
fn test_named_themes_list_contains_presets() {
    let names = ThemeRegistry::builtin().list_themes();
    for preset in ["default", "light", "dark", "enterprise"] {
        assert!(names.iter().any(|name| name == preset), "missing {preset}");
    }
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn test_every_theme_round_trips() {
    let registry = ThemeRegistry::builtin();
    for (name, theme) in registry.iter() {
        let rebuilt = deserialize(&serialize(theme)).unwrap();
        assert_eq!(&rebuilt, theme, "theme {name} did not round-trip");

        let text = to_json_string(theme, true).unwrap();
        assert_eq!(&from_json_str(&text).unwrap(), theme, "theme {name} JSON text");
    }
}

#[test]
fn test_get_theme_returns_independent_copies() {
    let registry = ThemeRegistry::builtin();
    let mut theme = registry.get_theme("light").unwrap();
    let other = registry.get_theme("light").unwrap();
    assert_eq!(theme, other);

    theme.colors.cell_fg = Some("#000000".to_string());
    theme.text = TextConfig {
        title: "Changed".to_string(),
        ..TextConfig::default()
    };

    assert_ne!(theme, other);
    let fresh = registry.get_theme("light").unwrap();
    assert_eq!(fresh, other);
    assert_eq!(fresh.colors.cell_fg.as_deref(), Some("#FFFFFF"));
    assert_eq!(fresh.text.title, "YourApp Starter");
}

#[test]
fn test_theme_names_are_normalized() {
    let registry = ThemeRegistry::builtin();
    let light = registry.get_theme("light").unwrap();
    assert_eq!(registry.get_theme("LIGHT").unwrap(), light);
    assert_eq!(registry.get_theme(" light ").unwrap(), light);
    assert_eq!(registry.get_theme("\tLight\n").unwrap(), light);
}

#[test]
fn test_unknown_theme_lists_available_names() {
    let registry = ThemeRegistry::builtin();
    let err = registry.get_theme("nonexistent").unwrap_err();
    match &err {
        ThemeError::UnknownTheme { name, available } => {
            assert_eq!(name, "nonexistent");
            assert_eq!(available, &["dark", "default", "enterprise", "light"]);
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        "Unknown theme 'nonexistent'. Available: dark, default, enterprise, light."
    );
}

#[test]
fn test_partial_payload_only_changes_named_fields() {
    let config = deserialize(&json!({"text": {"title": "Custom"}})).unwrap();
    let expected = GameViewConfig {
        text: TextConfig {
            title: "Custom".to_string(),
            ..TextConfig::default()
        },
        ..GameViewConfig::default()
    };
    assert_eq!(config, expected);
}

#[test]
fn test_codegen_from_partial_payload() {
    let config = deserialize(&json!({"text": {"title": "Doc Test"}})).unwrap();
    let identifier = sanitize_identifier("doc_theme");
    let snippet = render(&config, &identifier, Some("themes/doc.json"));

    assert!(snippet.contains("// Generated from themes/doc.json"));
    assert!(snippet.contains("pub fn doc_theme() -> GameViewConfig {"));
    assert!(snippet.contains("    GameViewConfig {"));
    assert!(snippet.contains("        text: TextConfig {"));
    assert!(snippet.contains("title: String::from(\"Doc Test\"),"));
}

#[test]
fn test_codegen_covers_every_color_of_dark_theme() {
    let dark = ThemeRegistry::builtin().get_theme("dark").unwrap();
    let snippet = render(&dark, "dark_theme", None);
    for color in ["#FFFFFF", "#CCCCCC", "#1F1F26", "#2E2E38", "#3C3C4A", "#4A4A5A"] {
        assert!(snippet.contains(&format!("Some(String::from(\"{color}\"))")), "{color}");
    }
    assert!(!snippet.contains("cell_fg: None"));
    assert!(!snippet.contains("reset_fg: None"));
}
