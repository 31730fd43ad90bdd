//! # View Configuration
//!
//! Immutable value records describing how the game view looks: fonts, layout,
//! strings and colors, aggregated into [GameViewConfig]. A standalone
//! [WindowConfig] describes the top-level window.
//!
//! Every record implements [Default] with fixed values, so a configuration built
//! from nothing is always fully populated. Partial input is handled by the
//! deserializer in [crate::interchange], never by these constructors.
//!
//! ```rust
//! use tictactoe_theme::config::{GameViewConfig, TextConfig};
//!
//! let config = GameViewConfig {
//!     text: TextConfig {
//!         title: "My Game".to_string(),
//!         ..TextConfig::default()
//!     },
//!     ..GameViewConfig::default()
//! };
//! assert_eq!(config.layout.cell_size, (100, 100));
//! ```

use serde::Serialize;

/// Window title, size and resize behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowConfig {
    /// The title of the window.
    pub title: String,
    /// The window size encoded as `WIDTHxHEIGHT`, e.g. `400x600`.
    pub geometry: String,
    /// Whether the window can be resized horizontally and vertically.
    pub resizable: (bool, bool),
}

impl WindowConfig {
    /// Parse [WindowConfig::geometry] into `(width, height)`.
    ///
    /// Returns [None] if the descriptor is not of the form `WIDTHxHEIGHT`.
    pub fn size(&self) -> Option<(u32, u32)> {
        let (width, height) = self.geometry.trim().split_once(['x', 'X'])?;
        Some((width.trim().parse().ok()?, height.trim().parse().ok()?))
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Tic Tac Toe".to_string(),
            geometry: "400x600".to_string(),
            resizable: (false, false),
        }
    }
}

/// A font size with an optional weight such as `bold`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontSpec {
    /// Point size.
    pub size: i32,
    /// Font weight, or [None] for the toolkit's regular weight.
    pub weight: Option<String>,
}

impl FontSpec {
    /// Create a font spec with the regular weight.
    pub fn new(size: i32) -> Self {
        Self { size, weight: None }
    }

    /// Create a bold font spec.
    pub fn bold(size: i32) -> Self {
        Self {
            size,
            weight: Some("bold".to_string()),
        }
    }
}

/// Fonts for the primary widgets. Each slot has its own default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontConfig {
    /// Title label font.
    pub title: FontSpec,
    /// Status line font.
    pub status: FontSpec,
    /// Board cell font.
    pub cell: FontSpec,
    /// Reset button font.
    pub reset: FontSpec,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            title: FontSpec::bold(32),
            status: FontSpec::new(20),
            cell: FontSpec::bold(32),
            reset: FontSpec::new(16),
        }
    }
}

/// Spacing and sizing for the view widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutConfig {
    /// Vertical padding around the title.
    pub title_padding: i32,
    /// Vertical padding around the status line.
    pub status_padding: i32,
    /// Horizontal and vertical padding around the board.
    pub board_padding: (i32, i32),
    /// Width and height of a single cell.
    pub cell_size: (i32, i32),
    /// Gap between adjacent cells.
    pub cell_spacing: i32,
    /// Vertical padding around the reset button.
    pub reset_padding: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            title_padding: 20,
            status_padding: 10,
            board_padding: (20, 20),
            cell_size: (100, 100),
            cell_spacing: 5,
            reset_padding: 20,
        }
    }
}

/// Human-readable strings rendered by the view.
///
/// [TextConfig::win_message_template] and [TextConfig::turn_message_template]
/// contain `{winner}` and `{player}` placeholders that the view substitutes when
/// it renders them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextConfig {
    /// Window and header title.
    pub title: String,
    /// Label of the reset button.
    pub reset_button: String,
    /// Status shown when the game ends in a draw.
    pub draw_message: String,
    /// Status shown when a player wins. Contains `{winner}`.
    pub win_message_template: String,
    /// Status shown between moves. Contains `{player}`.
    pub turn_message_template: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            title: "Tic Tac Toe".to_string(),
            reset_button: "New Game".to_string(),
            draw_message: "It's a draw!".to_string(),
            win_message_template: "Player {winner} wins!".to_string(),
            turn_message_template: "Player {player}'s turn".to_string(),
        }
    }
}

/// Color hooks. [None] keeps the toolkit's own color for that slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColorConfig {
    /// Title label text.
    pub title_text: Option<String>,
    /// Status line text.
    pub status_text: Option<String>,
    /// Board frame background.
    pub board_background: Option<String>,
    /// Cell text.
    pub cell_text: Option<String>,
    /// Cell background.
    pub cell_fg: Option<String>,
    /// Cell background while hovered.
    pub cell_hover: Option<String>,
    /// Reset button background.
    pub reset_fg: Option<String>,
}

/// Every tweakable aspect of the game view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GameViewConfig {
    /// Widget fonts.
    pub fonts: FontConfig,
    /// Widget spacing and sizes.
    pub layout: LayoutConfig,
    /// Displayed strings.
    pub text: TextConfig,
    /// Widget colors.
    pub colors: ColorConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_slots_have_independent_defaults() {
        let fonts = FontConfig::default();
        assert_eq!(fonts.title, FontSpec::bold(32));
        assert_eq!(fonts.status, FontSpec::new(20));
        assert_eq!(fonts.cell.weight.as_deref(), Some("bold"));
        assert_eq!(fonts.reset.size, 16);
        assert!(fonts.reset.weight.is_none());
    }

    #[test]
    fn test_default_view_config_is_fully_populated() {
        let config = GameViewConfig::default();
        assert_eq!(config.layout.board_padding, (20, 20));
        assert_eq!(config.text.draw_message, "It's a draw!");
        assert!(config.text.win_message_template.contains("{winner}"));
        assert!(config.text.turn_message_template.contains("{player}"));
        assert_eq!(config.colors, ColorConfig::default());
    }

    #[test]
    fn test_window_geometry() {
        let window = WindowConfig::default();
        assert_eq!(window.size(), Some((400, 600)));
        assert_eq!(window.resizable, (false, false));

        let odd = WindowConfig {
            geometry: "wide".to_string(),
            ..WindowConfig::default()
        };
        assert_eq!(odd.size(), None);
    }

    #[test]
    fn test_out_of_range_values_are_accepted() {
        let layout = LayoutConfig {
            cell_spacing: -4,
            ..LayoutConfig::default()
        };
        assert_eq!(layout.cell_spacing, -4);
    }
}
