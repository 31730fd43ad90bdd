use crate::config::{GameViewConfig, TextConfig};
use crate::theme::palette;

/// Create the dark theme: light text on slate cells.
///
/// Overrides every color and the title and reset strings. Fonts and layout
/// are the defaults.
pub fn create_dark_theme() -> GameViewConfig {
    GameViewConfig {
        colors: palette(
            "#FFFFFF", // title
            "#CCCCCC", // status
            "#1F1F26", // board background
            "#FFFFFF", // cell text
            "#2E2E38", // cell
            "#3C3C4A", // cell hover
            "#4A4A5A", // reset button
        ),
        text: TextConfig {
            title: "YourApp Starter (Dark)".to_string(),
            reset_button: "Restart".to_string(),
            ..TextConfig::default()
        },
        ..GameViewConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FontConfig, LayoutConfig};

    #[test]
    fn test_dark_theme_inherits_fonts_and_layout() {
        let theme = create_dark_theme();
        assert_eq!(theme.fonts, FontConfig::default());
        assert_eq!(theme.layout, LayoutConfig::default());
        assert_eq!(theme.text.reset_button, "Restart");
        assert_eq!(theme.text.draw_message, TextConfig::default().draw_message);
        assert_eq!(theme.colors.board_background.as_deref(), Some("#1F1F26"));
    }
}
