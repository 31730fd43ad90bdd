// SPDX-License-Identifier: LGPL-3.0-only

//! Async loader for serialized view configurations.
//!
//! Payloads are JSON interchange trees. Files ending in `.toml` are parsed as
//! TOML and converted to the same tree; TOML has no null, so optional values
//! in a TOML file can only be omitted.

use std::env;
use std::path::Path;

use tictactoe_theme::interchange::{deserialize, from_json_str};
use tictactoe_theme::{GameViewConfig, ThemeError};

use crate::error::PayloadError;
use crate::io_helpers::read_file_to_string;

/// Environment variable carrying an inline JSON payload.
pub const THEME_PAYLOAD_ENV_VAR: &str = "TICTACTOE_THEME_PAYLOAD";

/// Text format of a theme file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadFormat {
    /// JSON interchange tree.
    Json,
    /// TOML document with the same structure.
    Toml,
}

impl PayloadFormat {
    /// Pick the format from the file extension. Anything but `.toml` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Theme loader for serialized view configurations.
pub struct ThemeLoader;

impl ThemeLoader {
    /// Load a view configuration from a JSON or TOML file.
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> Result<GameViewConfig, PayloadError> {
        let path = path.as_ref();
        let content = read_file_to_string(path)
            .await
            .map_err(|e| PayloadError::unreadable(path, e))?;

        log::debug!("Loaded theme payload from {}", path.display());
        Self::load_from_str(&content, PayloadFormat::from_path(path), path)
    }

    /// Blocking variant of [ThemeLoader::load_from_file].
    pub fn load_from_file_blocking<P: AsRef<Path>>(path: P) -> Result<GameViewConfig, PayloadError> {
        smol::block_on(Self::load_from_file(path))
    }

    /// Parse file content. `path` is only used in error messages.
    pub fn load_from_str<P: AsRef<Path>>(
        content: &str,
        format: PayloadFormat,
        path: P,
    ) -> Result<GameViewConfig, PayloadError> {
        match format {
            PayloadFormat::Json => Ok(from_json_str(content)?),
            PayloadFormat::Toml => {
                let table: toml::Value = toml::from_str(content)
                    .map_err(|e| PayloadError::toml(path, e.to_string()))?;
                let tree = serde_json::to_value(table)
                    .map_err(|e| ThemeError::Serialization(e.to_string()))?;
                Ok(deserialize(&tree)?)
            },
        }
    }

    /// Parse an inline JSON payload.
    pub fn load_from_payload(payload: &str) -> Result<GameViewConfig, PayloadError> {
        Ok(from_json_str(payload)?)
    }

    /// Read [THEME_PAYLOAD_ENV_VAR]. Unset or blank gives `Ok(None)`.
    pub fn from_env() -> Result<Option<GameViewConfig>, PayloadError> {
        Self::from_env_with(|key| env::var(key).ok())
    }

    /// Like [ThemeLoader::from_env] with a custom variable lookup.
    pub fn from_env_with<F>(lookup: F) -> Result<Option<GameViewConfig>, PayloadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(THEME_PAYLOAD_ENV_VAR) {
            Some(payload) if !payload.trim().is_empty() => {
                Self::load_from_payload(&payload).map(Some)
            },
            _ => Ok(None),
        }
    }
}
