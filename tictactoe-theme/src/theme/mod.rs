//! # Bundled Themes
//!
//! Each bundled theme is a [GameViewConfig] literal that overrides a few
//! sections and inherits defaults for the rest. They are collected into a
//! [ThemeRegistry](crate::registry::ThemeRegistry) by
//! [ThemeRegistry::builtin](crate::registry::ThemeRegistry::builtin).

use crate::config::{ColorConfig, GameViewConfig};

/// The dark theme.
pub mod dark;
/// The enterprise theme.
pub mod enterprise;
/// The light theme.
pub mod light;

pub use dark::create_dark_theme;
pub use enterprise::create_enterprise_theme;
pub use light::create_light_theme;

/// The plain default configuration, keeping the toolkit's colors.
pub fn create_default_theme() -> GameViewConfig {
    GameViewConfig::default()
}

/// Build a [ColorConfig] with every slot set, in declaration order.
pub(crate) fn palette(
    title_text: &str,
    status_text: &str,
    board_background: &str,
    cell_text: &str,
    cell_fg: &str,
    cell_hover: &str,
    reset_fg: &str,
) -> ColorConfig {
    ColorConfig {
        title_text: Some(title_text.to_string()),
        status_text: Some(status_text.to_string()),
        board_background: Some(board_background.to_string()),
        cell_text: Some(cell_text.to_string()),
        cell_fg: Some(cell_fg.to_string()),
        cell_hover: Some(cell_hover.to_string()),
        reset_fg: Some(reset_fg.to_string()),
    }
}
