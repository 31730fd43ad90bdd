//! # Theme Code Generation
//!
//! Turns a [GameViewConfig] into Rust source that rebuilds it with struct
//! literals. This is how a JSON theme payload graduates into a compiled-in
//! preset: load it, [render] it, paste the function next to the bundled
//! themes.
//!
//! ```rust
//! use tictactoe_theme::codegen::render;
//! use tictactoe_theme::config::GameViewConfig;
//!
//! let snippet = render(&GameViewConfig::default(), "my-theme", Some("my-theme.json"));
//! assert!(snippet.starts_with("// Generated from my-theme.json"));
//! assert!(snippet.contains("pub fn my_theme() -> GameViewConfig {"));
//! ```

use unicode_ident::{is_xid_continue, is_xid_start};

use crate::config::{ColorConfig, FontConfig, FontSpec, GameViewConfig, LayoutConfig, TextConfig};

/// Identifier used when sanitizing leaves nothing behind.
pub const FALLBACK_IDENTIFIER: &str = "generated_theme";

/// `use` declaration that brings every type referenced by a snippet into scope.
pub const IMPORT_BLOCK: &str = "use tictactoe_theme::config::{
    ColorConfig, FontConfig, FontSpec, GameViewConfig, LayoutConfig, TextConfig,
};
";

const INDENT: &str = "    ";

/// Strict and reserved keywords of the 2021 edition, plus `gen` from 2024.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub",
    "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be written as raw identifiers.
const NON_RAW_KEYWORDS: &[&str] = &["crate", "self", "Self", "super"];

/// Make `value` usable as a Rust identifier.
///
/// Alphanumeric characters that Rust accepts inside identifiers are kept,
/// anything else becomes `_`. Runs of `_` collapse, leading and trailing `_`
/// are dropped and an empty result becomes [FALLBACK_IDENTIFIER]. A result
/// that cannot start an identifier (a leading digit) gets a `theme_` prefix.
///
/// Keywords pass through unchanged; [render] makes them usable.
pub fn sanitize_identifier(value: &str) -> String {
    let mut identifier = String::with_capacity(value.len());
    for ch in value.chars() {
        let ch = if ch == '_' || (ch.is_alphanumeric() && is_xid_continue(ch)) {
            ch
        } else {
            '_'
        };
        if ch == '_' && identifier.ends_with('_') {
            continue;
        }
        identifier.push(ch);
    }

    let identifier = identifier.trim_matches('_');
    if identifier.is_empty() {
        FALLBACK_IDENTIFIER.to_string()
    } else if !identifier.starts_with(is_xid_start) {
        format!("theme_{identifier}")
    } else {
        identifier.to_string()
    }
}

/// Build an identifier from a file stem with an optional prefix and suffix.
///
/// A non-empty prefix is joined to the stem with `_`.
pub fn derive_identifier(stem: &str, prefix: &str, suffix: &str) -> String {
    let separator = if prefix.is_empty() || prefix.ends_with('_') {
        ""
    } else {
        "_"
    };
    sanitize_identifier(&format!("{prefix}{separator}{stem}{suffix}"))
}

/// Render `config` as a function returning it.
///
/// The function name is `identifier` after [sanitize_identifier]. When
/// `origin` is given, the snippet starts with a comment naming it.
pub fn render(config: &GameViewConfig, identifier: &str, origin: Option<&str>) -> String {
    let identifier = function_name(&sanitize_identifier(identifier));
    let mut out = SnippetWriter::default();
    if let Some(origin) = origin {
        // A line break would end the comment.
        let origin: String = origin
            .chars()
            .map(|ch| if ch.is_control() { ' ' } else { ch })
            .collect();
        out.line(0, format!("// Generated from {origin}"));
    }
    out.line(0, format!("pub fn {identifier}() -> GameViewConfig {{"));
    out.line(1, "GameViewConfig {");
    out.fonts(2, &config.fonts);
    out.layout(2, &config.layout);
    out.text(2, &config.text);
    out.colors(2, &config.colors);
    out.line(1, "}");
    out.line(0, "}");
    out.finish()
}

/// Spell a sanitized identifier so it is not parsed as a keyword.
fn function_name(identifier: &str) -> String {
    if NON_RAW_KEYWORDS.contains(&identifier) {
        format!("{identifier}_theme")
    } else if KEYWORDS.contains(&identifier) {
        format!("r#{identifier}")
    } else {
        identifier.to_string()
    }
}

/// Join rendered snippets into one module, headed by [IMPORT_BLOCK].
pub fn render_module<I, S>(snippets: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let body: Vec<String> = snippets
        .into_iter()
        .map(|snippet| snippet.as_ref().to_string())
        .collect();
    format!("{IMPORT_BLOCK}\n{}\n", body.join("\n\n"))
}

/// Quote `value` as a Rust string literal. `str`'s `Debug` output is one.
fn string_literal(value: &str) -> String {
    format!("{value:?}")
}

fn owned_string(value: &str) -> String {
    format!("String::from({})", string_literal(value))
}

fn optional_string(value: Option<&str>) -> String {
    match value {
        Some(value) => format!("Some({})", owned_string(value)),
        None => "None".to_string(),
    }
}

fn pair((first, second): (i32, i32)) -> String {
    format!("({first}, {second})")
}

fn font_spec(spec: &FontSpec) -> String {
    format!(
        "FontSpec {{ size: {}, weight: {} }}",
        spec.size,
        optional_string(spec.weight.as_deref())
    )
}

#[derive(Default)]
struct SnippetWriter {
    lines: Vec<String>,
}

impl SnippetWriter {
    fn line(&mut self, level: usize, content: impl AsRef<str>) {
        self.lines
            .push(format!("{}{}", INDENT.repeat(level), content.as_ref()));
    }

    fn field(&mut self, level: usize, name: &str, value: impl AsRef<str>) {
        self.line(level, format!("{name}: {},", value.as_ref()));
    }

    fn fonts(&mut self, level: usize, fonts: &FontConfig) {
        self.line(level, "fonts: FontConfig {");
        self.field(level + 1, "title", font_spec(&fonts.title));
        self.field(level + 1, "status", font_spec(&fonts.status));
        self.field(level + 1, "cell", font_spec(&fonts.cell));
        self.field(level + 1, "reset", font_spec(&fonts.reset));
        self.line(level, "},");
    }

    fn layout(&mut self, level: usize, layout: &LayoutConfig) {
        self.line(level, "layout: LayoutConfig {");
        self.field(level + 1, "title_padding", layout.title_padding.to_string());
        self.field(level + 1, "status_padding", layout.status_padding.to_string());
        self.field(level + 1, "board_padding", pair(layout.board_padding));
        self.field(level + 1, "cell_size", pair(layout.cell_size));
        self.field(level + 1, "cell_spacing", layout.cell_spacing.to_string());
        self.field(level + 1, "reset_padding", layout.reset_padding.to_string());
        self.line(level, "},");
    }

    fn text(&mut self, level: usize, text: &TextConfig) {
        self.line(level, "text: TextConfig {");
        self.field(level + 1, "title", owned_string(&text.title));
        self.field(level + 1, "reset_button", owned_string(&text.reset_button));
        self.field(level + 1, "draw_message", owned_string(&text.draw_message));
        self.field(
            level + 1,
            "win_message_template",
            owned_string(&text.win_message_template),
        );
        self.field(
            level + 1,
            "turn_message_template",
            owned_string(&text.turn_message_template),
        );
        self.line(level, "},");
    }

    fn colors(&mut self, level: usize, colors: &ColorConfig) {
        let slots = [
            ("title_text", &colors.title_text),
            ("status_text", &colors.status_text),
            ("board_background", &colors.board_background),
            ("cell_text", &colors.cell_text),
            ("cell_fg", &colors.cell_fg),
            ("cell_hover", &colors.cell_hover),
            ("reset_fg", &colors.reset_fg),
        ];
        self.line(level, "colors: ColorConfig {");
        for (name, value) in slots {
            self.field(level + 1, name, optional_string(value.as_deref()));
        }
        self.line(level, "},");
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_identifier() {
        assert_eq!(sanitize_identifier("123-my theme"), "theme_123_my_theme");
        assert_eq!(sanitize_identifier("__already_clean__"), "already_clean");
        assert_eq!(sanitize_identifier(""), "generated_theme");
        assert_eq!(sanitize_identifier("---"), "generated_theme");
        assert_eq!(sanitize_identifier("a..b  c"), "a_b_c");
        assert_eq!(sanitize_identifier("café"), "café");
        assert_eq!(sanitize_identifier("日本"), "日本");
        assert_eq!(sanitize_identifier("x²"), "x");
        assert_eq!(sanitize_identifier("½ board"), "board");
    }

    #[test]
    fn test_render_keyword_identifiers() {
        let config = GameViewConfig::default();
        assert!(render(&config, "match", None).starts_with("pub fn r#match() -> GameViewConfig {"));
        assert!(render(&config, "type", None).starts_with("pub fn r#type() -> GameViewConfig {"));
        assert!(render(&config, "self", None).starts_with("pub fn self_theme() -> GameViewConfig {"));
        assert!(render(&config, "Self", None).starts_with("pub fn Self_theme() -> GameViewConfig {"));
        assert!(render(&config, "matcher", None).starts_with("pub fn matcher() -> GameViewConfig {"));
    }

    #[test]
    fn test_render_keeps_origin_on_one_line() {
        let snippet = render(&GameViewConfig::default(), "base", Some("a\nfn evil() {}\r"));
        let first = snippet.lines().next().unwrap_or_default();
        assert_eq!(first, "// Generated from a fn evil() {} ");
        assert_eq!(snippet.lines().nth(1), Some("pub fn base() -> GameViewConfig {"));
    }

    #[test]
    fn test_derive_identifier() {
        assert_eq!(derive_identifier("cli-theme", "", "_theme"), "cli_theme_theme");
        assert_eq!(derive_identifier("ocean", "corp", "_theme"), "corp_ocean_theme");
        assert_eq!(derive_identifier("ocean", "corp_", ""), "corp_ocean");
        assert_eq!(derive_identifier("2024", "", ""), "theme_2024");
    }

    #[test]
    fn test_render_default_layout_block() {
        let snippet = render(&GameViewConfig::default(), "base_theme", None);
        let expected = "        layout: LayoutConfig {
            title_padding: 20,
            status_padding: 10,
            board_padding: (20, 20),
            cell_size: (100, 100),
            cell_spacing: 5,
            reset_padding: 20,
        },";
        assert!(snippet.contains(expected), "{snippet}");
        assert!(snippet.starts_with("pub fn base_theme() -> GameViewConfig {"));
        assert!(snippet.ends_with("    }\n}"));
    }

    #[test]
    fn test_render_fonts_and_absent_colors() {
        let snippet = render(&GameViewConfig::default(), "base_theme", None);
        assert!(snippet.contains(
            "title: FontSpec { size: 32, weight: Some(String::from(\"bold\")) },"
        ));
        assert!(snippet.contains("status: FontSpec { size: 20, weight: None },"));
        assert!(snippet.contains("            cell_hover: None,"));
        assert!(!snippet.contains("Default::default()"));
    }

    #[test]
    fn test_render_escapes_strings() {
        let config = GameViewConfig {
            text: TextConfig {
                title: "Say \"hi\"\\\nnow".to_string(),
                ..TextConfig::default()
            },
            ..GameViewConfig::default()
        };
        let snippet = render(&config, "quoted", None);
        assert!(snippet.contains(r#"title: String::from("Say \"hi\"\\\nnow"),"#), "{snippet}");
        assert!(snippet.contains(r#"draw_message: String::from("It's a draw!"),"#));
    }

    #[test]
    fn test_render_sanitizes_identifier() {
        let snippet = render(&GameViewConfig::default(), "123-my theme", Some("a.json"));
        assert!(snippet.contains("pub fn theme_123_my_theme() -> GameViewConfig {"));
    }

    #[test]
    fn test_render_module_joins_snippets() {
        let module = render_module(["fn a() {}", "fn b() {}"]);
        assert!(module.starts_with(IMPORT_BLOCK));
        assert!(module.ends_with("fn a() {}\n\nfn b() {}\n"));
    }
}
