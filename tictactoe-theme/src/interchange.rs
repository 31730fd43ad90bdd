//! # Interchange Trees
//!
//! Converts [GameViewConfig] to and from a generic JSON tree
//! ([serde_json::Value]) so configurations can travel through files and
//! environment variables.
//!
//! ## Shape
//!
//! ```json
//! {
//!   "fonts":  { "title": { "size": 32, "weight": "bold" }, "status": ..., "cell": ..., "reset": ... },
//!   "layout": { "title_padding": 20, "board_padding": [20, 20], "cell_size": [100, 100], ... },
//!   "text":   { "title": "Tic Tac Toe", "reset_button": "New Game", ... },
//!   "colors": { "title_text": null, "cell_fg": "#FFFFFF", ... }
//! }
//! ```
//!
//! Optional values are always written, as a string or `null`. When reading,
//! any key may be missing at any level and falls back to the default of that
//! field; unknown keys are ignored.

use serde_json::{json, Map, Value};

use crate::config::{ColorConfig, FontConfig, FontSpec, GameViewConfig, LayoutConfig, TextConfig};
use crate::error::{ThemeError, ThemeResult};

const SECTIONS: &[&str] = &["fonts", "layout", "text", "colors"];
const FONT_SLOTS: &[&str] = &["title", "status", "cell", "reset"];
const FONT_FIELDS: &[&str] = &["size", "weight"];
const LAYOUT_FIELDS: &[&str] = &[
    "title_padding",
    "status_padding",
    "board_padding",
    "cell_size",
    "cell_spacing",
    "reset_padding",
];
const TEXT_FIELDS: &[&str] = &[
    "title",
    "reset_button",
    "draw_message",
    "win_message_template",
    "turn_message_template",
];
const COLOR_FIELDS: &[&str] = &[
    "title_text",
    "status_text",
    "board_background",
    "cell_text",
    "cell_fg",
    "cell_hover",
    "reset_fg",
];

/// Convert a configuration into an interchange tree.
pub fn serialize(config: &GameViewConfig) -> Value {
    json!({
        "fonts": config.fonts,
        "layout": config.layout,
        "text": config.text,
        "colors": config.colors,
    })
}

/// Rebuild a configuration from an interchange tree, defaulting every field
/// that the tree does not mention.
pub fn deserialize(tree: &Value) -> ThemeResult<GameViewConfig> {
    let root = Fields::root(tree)?;
    root.ignore_unknown(SECTIONS);
    let defaults = GameViewConfig::default();

    let fonts = root.child("fonts")?;
    fonts.ignore_unknown(FONT_SLOTS);
    let fonts = FontConfig {
        title: font_spec(&fonts.child("title")?, &defaults.fonts.title)?,
        status: font_spec(&fonts.child("status")?, &defaults.fonts.status)?,
        cell: font_spec(&fonts.child("cell")?, &defaults.fonts.cell)?,
        reset: font_spec(&fonts.child("reset")?, &defaults.fonts.reset)?,
    };

    let layout = layout(&root.child("layout")?, &defaults.layout)?;
    let text = text(&root.child("text")?, &defaults.text)?;
    let colors = colors(&root.child("colors")?, &defaults.colors)?;

    Ok(GameViewConfig {
        fonts,
        layout,
        text,
        colors,
    })
}

/// Parse JSON text and [deserialize] it.
pub fn from_json_str(content: &str) -> ThemeResult<GameViewConfig> {
    let tree: Value = serde_json::from_str(content)
        .map_err(|e| ThemeError::malformed("$", format!("a JSON document ({e})")))?;
    deserialize(&tree)
}

/// [serialize] a configuration and encode it as JSON text.
pub fn to_json_string(config: &GameViewConfig, pretty: bool) -> ThemeResult<String> {
    let tree = serialize(config);
    let encoded = if pretty {
        serde_json::to_string_pretty(&tree)
    } else {
        serde_json::to_string(&tree)
    };
    encoded.map_err(|e| ThemeError::Serialization(e.to_string()))
}

fn font_spec(fields: &Fields<'_>, fallback: &FontSpec) -> ThemeResult<FontSpec> {
    fields.ignore_unknown(FONT_FIELDS);
    Ok(FontSpec {
        size: fields.int("size", fallback.size)?,
        weight: fields.optional_string("weight", fallback.weight.as_deref())?,
    })
}

fn layout(fields: &Fields<'_>, fallback: &LayoutConfig) -> ThemeResult<LayoutConfig> {
    fields.ignore_unknown(LAYOUT_FIELDS);
    Ok(LayoutConfig {
        title_padding: fields.int("title_padding", fallback.title_padding)?,
        status_padding: fields.int("status_padding", fallback.status_padding)?,
        board_padding: fields.pair("board_padding", fallback.board_padding)?,
        cell_size: fields.pair("cell_size", fallback.cell_size)?,
        cell_spacing: fields.int("cell_spacing", fallback.cell_spacing)?,
        reset_padding: fields.int("reset_padding", fallback.reset_padding)?,
    })
}

fn text(fields: &Fields<'_>, fallback: &TextConfig) -> ThemeResult<TextConfig> {
    fields.ignore_unknown(TEXT_FIELDS);
    Ok(TextConfig {
        title: fields.string("title", &fallback.title)?,
        reset_button: fields.string("reset_button", &fallback.reset_button)?,
        draw_message: fields.string("draw_message", &fallback.draw_message)?,
        win_message_template: fields
            .string("win_message_template", &fallback.win_message_template)?,
        turn_message_template: fields
            .string("turn_message_template", &fallback.turn_message_template)?,
    })
}

fn colors(fields: &Fields<'_>, fallback: &ColorConfig) -> ThemeResult<ColorConfig> {
    fields.ignore_unknown(COLOR_FIELDS);
    Ok(ColorConfig {
        title_text: fields.optional_string("title_text", fallback.title_text.as_deref())?,
        status_text: fields.optional_string("status_text", fallback.status_text.as_deref())?,
        board_background: fields
            .optional_string("board_background", fallback.board_background.as_deref())?,
        cell_text: fields.optional_string("cell_text", fallback.cell_text.as_deref())?,
        cell_fg: fields.optional_string("cell_fg", fallback.cell_fg.as_deref())?,
        cell_hover: fields.optional_string("cell_hover", fallback.cell_hover.as_deref())?,
        reset_fg: fields.optional_string("reset_fg", fallback.reset_fg.as_deref())?,
    })
}

/// One object level of an interchange tree, remembering where it sits.
///
/// A missing or `null` object reads as empty, so every lookup falls back.
struct Fields<'a> {
    path: String,
    map: Option<&'a Map<String, Value>>,
}

impl<'a> Fields<'a> {
    fn root(tree: &'a Value) -> ThemeResult<Self> {
        match tree {
            Value::Object(map) => Ok(Self {
                path: String::new(),
                map: Some(map),
            }),
            _ => Err(ThemeError::malformed("$", "an object")),
        }
    }

    fn key_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.and_then(|map| map.get(key))
    }

    fn child(&self, key: &str) -> ThemeResult<Fields<'a>> {
        let map = match self.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::Object(map)) => Some(map),
            Some(_) => return Err(ThemeError::malformed(self.key_path(key), "an object")),
        };
        Ok(Fields {
            path: self.key_path(key),
            map,
        })
    }

    fn ignore_unknown(&self, known: &[&str]) {
        let Some(map) = self.map else {
            return;
        };
        for key in map.keys().filter(|key| !known.contains(&key.as_str())) {
            log::debug!("Ignoring unrecognized theme key '{}'", self.key_path(key));
        }
    }

    fn int(&self, key: &str, fallback: i32) -> ThemeResult<i32> {
        match self.get(key) {
            None => Ok(fallback),
            Some(value) => as_i32(value)
                .ok_or_else(|| ThemeError::malformed(self.key_path(key), "a 32-bit integer")),
        }
    }

    fn pair(&self, key: &str, fallback: (i32, i32)) -> ThemeResult<(i32, i32)> {
        let Some(value) = self.get(key) else {
            return Ok(fallback);
        };
        match value.as_array().map(Vec::as_slice) {
            Some([first, second]) => match (as_i32(first), as_i32(second)) {
                (Some(first), Some(second)) => Ok((first, second)),
                _ => Err(ThemeError::malformed(
                    self.key_path(key),
                    "a two-element integer array",
                )),
            },
            _ => Err(ThemeError::malformed(
                self.key_path(key),
                "a two-element integer array",
            )),
        }
    }

    fn string(&self, key: &str, fallback: &str) -> ThemeResult<String> {
        match self.get(key) {
            None => Ok(fallback.to_string()),
            Some(Value::String(value)) => Ok(value.clone()),
            Some(_) => Err(ThemeError::malformed(self.key_path(key), "a string")),
        }
    }

    fn optional_string(&self, key: &str, fallback: Option<&str>) -> ThemeResult<Option<String>> {
        match self.get(key) {
            None => Ok(fallback.map(str::to_string)),
            Some(Value::Null) => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.clone())),
            Some(_) => Err(ThemeError::malformed(
                self.key_path(key),
                "a string or null",
            )),
        }
    }
}

fn as_i32(value: &Value) -> Option<i32> {
    value.as_i64().and_then(|n| i32::try_from(n).ok())
}
