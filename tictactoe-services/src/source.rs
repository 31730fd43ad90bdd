// SPDX-License-Identifier: LGPL-3.0-only

//! Choosing where the view configuration comes from.
//!
//! The launcher accepts a theme file and a theme name on the command line and
//! falls back to environment variables. A file always wins over a name, and
//! an explicit choice wins over the environment:
//!
//! 1. explicit theme file
//! 2. `TICTACTOE_THEME_FILE`
//! 3. explicit theme name
//! 4. `TICTACTOE_THEME`
//! 5. `TICTACTOE_THEME_PAYLOAD`
//! 6. the default configuration

use std::env;
use std::fmt;
use std::path::PathBuf;

use tictactoe_theme::{GameViewConfig, ThemeRegistry};

use crate::error::PayloadError;
use crate::loader::{ThemeLoader, THEME_PAYLOAD_ENV_VAR};

/// Environment variable naming a registered theme.
pub const THEME_ENV_VAR: &str = "TICTACTOE_THEME";
/// Environment variable pointing at a serialized theme file.
pub const THEME_FILE_ENV_VAR: &str = "TICTACTOE_THEME_FILE";

/// A place a view configuration can be loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSource {
    /// A JSON or TOML file.
    File(PathBuf),
    /// A theme registered in the [ThemeRegistry].
    Named(String),
    /// An inline JSON payload.
    Payload(String),
    /// [GameViewConfig::default].
    Default,
}

impl ThemeSource {
    /// Load the configuration this source describes.
    pub async fn resolve(&self, registry: &ThemeRegistry) -> Result<GameViewConfig, PayloadError> {
        match self {
            Self::File(path) => ThemeLoader::load_from_file(path).await,
            Self::Named(name) => Ok(registry.get_theme(name)?),
            Self::Payload(payload) => ThemeLoader::load_from_payload(payload),
            Self::Default => Ok(GameViewConfig::default()),
        }
    }
}

impl fmt::Display for ThemeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "theme file {}", path.display()),
            Self::Named(name) => write!(f, "theme '{name}'"),
            Self::Payload(_) => write!(f, "{THEME_PAYLOAD_ENV_VAR}"),
            Self::Default => write!(f, "default configuration"),
        }
    }
}

/// Theme choices made explicitly, e.g. on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeSelection {
    /// Path to a serialized theme file.
    pub theme_file: Option<PathBuf>,
    /// Name of a registered theme.
    pub theme_name: Option<String>,
}

impl ThemeSelection {
    /// Create a selection with no explicit choices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the explicit theme file.
    pub fn with_theme_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.theme_file = Some(path.into());
        self
    }

    /// Set the explicit theme name.
    pub fn with_theme_name(mut self, name: impl Into<String>) -> Self {
        self.theme_name = Some(name.into());
        self
    }

    /// Pick the source, consulting the process environment.
    pub fn source(&self) -> ThemeSource {
        self.source_with(|key| env::var(key).ok())
    }

    /// Pick the source with a custom variable lookup. Blank values count as unset.
    pub fn source_with<F>(&self, lookup: F) -> ThemeSource
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(path) = self
            .theme_file
            .clone()
            .or_else(|| non_empty(THEME_FILE_ENV_VAR).map(PathBuf::from))
        {
            return ThemeSource::File(path);
        }
        if let Some(name) = self.theme_name.clone().or_else(|| non_empty(THEME_ENV_VAR)) {
            return ThemeSource::Named(name);
        }
        match non_empty(THEME_PAYLOAD_ENV_VAR) {
            Some(payload) => ThemeSource::Payload(payload),
            None => ThemeSource::Default,
        }
    }

    /// Pick the source from the environment and load it.
    pub async fn resolve(&self, registry: &ThemeRegistry) -> Result<GameViewConfig, PayloadError> {
        let source = self.source();
        log::info!("Loading view configuration from {source}");
        source.resolve(registry).await
    }

    /// Like [ThemeSelection::resolve], falling back to the default
    /// configuration (with a warning) if loading fails.
    pub async fn resolve_or_default(&self, registry: &ThemeRegistry) -> GameViewConfig {
        match self.resolve(registry).await {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load view configuration: {}. Using defaults.", e);
                GameViewConfig::default()
            },
        }
    }
}
