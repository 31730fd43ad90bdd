use crate::config::{GameViewConfig, TextConfig};
use crate::theme::palette;

/// Create the light theme: neutral greys on white cells.
pub fn create_light_theme() -> GameViewConfig {
    GameViewConfig {
        colors: palette(
            "#222222", // title
            "#444444", // status
            "#F5F5F5", // board background
            "#111111", // cell text
            "#FFFFFF", // cell
            "#E0E0E0", // cell hover
            "#DDDDDD", // reset button
        ),
        text: TextConfig {
            title: "YourApp Starter".to_string(),
            ..TextConfig::default()
        },
        ..GameViewConfig::default()
    }
}
