use crate::config::{FontConfig, FontSpec, GameViewConfig, LayoutConfig, TextConfig};
use crate::theme::palette;

/// Create the enterprise theme.
///
/// Navy on pale blue, a slightly smaller title and a roomier board.
pub fn create_enterprise_theme() -> GameViewConfig {
    GameViewConfig {
        colors: palette(
            "#0A1F44", // title
            "#1B365D", // status
            "#D9E8FF", // board background
            "#0A1F44", // cell text
            "#FFFFFF", // cell
            "#BBD0F5", // cell hover
            "#0A84FF", // reset button
        ),
        fonts: FontConfig {
            title: FontSpec::bold(28),
            ..FontConfig::default()
        },
        text: TextConfig {
            title: "Enterprise Suite".to_string(),
            reset_button: "Start Over".to_string(),
            ..TextConfig::default()
        },
        layout: LayoutConfig {
            board_padding: (30, 30),
            ..LayoutConfig::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enterprise_theme_overrides() {
        let theme = create_enterprise_theme();
        assert_eq!(theme.fonts.title, FontSpec::bold(28));
        assert_eq!(theme.fonts.status, FontConfig::default().status);
        assert_eq!(theme.layout.board_padding, (30, 30));
        assert_eq!(theme.layout.cell_size, (100, 100));
        assert_eq!(theme.colors.reset_fg.as_deref(), Some("#0A84FF"));
    }
}
