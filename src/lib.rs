#![warn(missing_docs)]

//! Themes, view configuration and theme loading for a Tic Tac Toe desktop starter.

pub use tictactoe_theme as theme;
#[cfg(feature = "services")]
pub use tictactoe_services as services;

/// A "prelude" for users of the tictactoe crates.
///
/// Importing this module brings into scope the most common types
/// needed to pick and load a view configuration.
///
/// ```rust
/// use tictactoe::prelude::*;
///
/// let registry = ThemeRegistry::builtin();
/// let config: GameViewConfig = registry.get_theme("light").unwrap();
/// assert_eq!(config.layout.cell_size, (100, 100));
/// ```
pub mod prelude {
    pub use crate::theme::codegen::{derive_identifier, render, render_module};
    pub use crate::theme::interchange::{deserialize, from_json_str, serialize, to_json_string};
    pub use crate::theme::{
        ColorConfig, FontConfig, FontSpec, GameViewConfig, LayoutConfig, TextConfig, ThemeError,
        ThemeRegistry, ThemeResult, WindowConfig,
    };

    #[cfg(feature = "services")]
    pub use crate::services::{PayloadError, ThemeLoader, ThemeSelection, ThemeSource};
}
