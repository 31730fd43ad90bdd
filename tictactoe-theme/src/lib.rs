#![warn(missing_docs)]

//! # Tic Tac Toe Theming
//!
//! View configuration for the Tic Tac Toe starter: typed records, bundled
//! themes, a JSON interchange layer and a generator that turns configurations
//! back into Rust source.
//!
//! ## Overview
//!
//! - **[GameViewConfig](config::GameViewConfig)**: fonts, layout, strings and
//!   colors of the game view, each with fixed defaults
//! - **[ThemeRegistry](registry::ThemeRegistry)**: named presets with
//!   case-insensitive lookup
//! - **[serialize](interchange::serialize) / [deserialize](interchange::deserialize)**:
//!   conversion to and from JSON trees, filling in defaults for missing keys
//! - **[render](codegen::render)**: Rust source that rebuilds a configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use tictactoe_theme::interchange::{deserialize, serialize};
//! use tictactoe_theme::registry::ThemeRegistry;
//!
//! let registry = ThemeRegistry::builtin();
//! let theme = registry.get_theme("enterprise").unwrap();
//!
//! let tree = serialize(&theme);
//! assert_eq!(deserialize(&tree).unwrap(), theme);
//! ```
//!
//! ## Partial Payloads
//!
//! A payload only needs the keys it changes:
//!
//! ```rust
//! use serde_json::json;
//! use tictactoe_theme::interchange::deserialize;
//!
//! let config = deserialize(&json!({"text": {"title": "Custom"}})).unwrap();
//! assert_eq!(config.text.title, "Custom");
//! assert_eq!(config.layout.cell_size, (100, 100));
//! ```
//!
//! Everything here is synchronous and free of I/O. Reading payloads from
//! files or the environment is left to `tictactoe-services`.

/// Contains code generation for configurations.
pub mod codegen;
/// Contains the [config::GameViewConfig] record and its parts.
pub mod config;
/// Contains the [error::ThemeError] type.
pub mod error;
/// Contains conversion to and from JSON interchange trees.
pub mod interchange;
/// Contains the [registry::ThemeRegistry] of named themes.
pub mod registry;
/// Contains the bundled themes.
pub mod theme;

pub use config::{
    ColorConfig, FontConfig, FontSpec, GameViewConfig, LayoutConfig, TextConfig, WindowConfig,
};
pub use error::{ThemeError, ThemeResult};
pub use registry::ThemeRegistry;
