//! # Theme Error Types
//!
//! Errors returned by the registry and the interchange layer.

use thiserror::Error;

/// Errors that can occur when looking up or decoding a view configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// No theme with the requested name is registered.
    #[error("Unknown theme '{name}'. Available: {}.", available.join(", "))]
    UnknownTheme {
        /// The name as the caller supplied it.
        name: String,
        /// Every registered theme name, sorted.
        available: Vec<String>,
    },

    /// A value in an interchange tree does not have the expected shape.
    #[error("Malformed theme config at '{path}': expected {expected}")]
    MalformedConfig {
        /// Dotted path of the offending key, `$` for the document itself.
        path: String,
        /// What the key should have held.
        expected: String,
    },

    /// Error encoding a configuration as text.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create an unknown theme error.
    pub fn unknown_theme(name: impl Into<String>, available: Vec<String>) -> Self {
        Self::UnknownTheme {
            name: name.into(),
            available,
        }
    }

    /// Create a malformed config error.
    pub fn malformed(path: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::MalformedConfig {
            path: path.into(),
            expected: expected.into(),
        }
    }
}
