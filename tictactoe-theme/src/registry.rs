//! # Theme Registry
//!
//! A read-only table of named [GameViewConfig] presets.
//!
//! The registry is an ordinary value: build it once with
//! [ThemeRegistry::builtin] (optionally adding presets with
//! [ThemeRegistry::register]) at startup and pass it to whoever resolves
//! theme names. Lookups never hand out the canonical entries; every
//! [ThemeRegistry::get_theme] call returns a fresh copy.
//!
//! ```rust
//! use tictactoe_theme::registry::ThemeRegistry;
//!
//! let registry = ThemeRegistry::builtin();
//! let dark = registry.get_theme(" Dark ").unwrap();
//! assert_eq!(dark.text.reset_button, "Restart");
//! ```

use indexmap::IndexMap;

use crate::config::GameViewConfig;
use crate::error::{ThemeError, ThemeResult};
use crate::interchange::{deserialize, serialize};
use crate::theme::{
    create_dark_theme, create_default_theme, create_enterprise_theme, create_light_theme,
};

/// Named theme presets, keyed by normalized (trimmed, lower-case) name.
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    themes: IndexMap<String, GameViewConfig>,
}

impl ThemeRegistry {
    /// Create a registry without any themes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a registry holding the bundled `default`, `light`, `dark` and
    /// `enterprise` themes.
    pub fn builtin() -> Self {
        Self::empty()
            .register("default", create_default_theme())
            .register("light", create_light_theme())
            .register("dark", create_dark_theme())
            .register("enterprise", create_enterprise_theme())
    }

    /// Add a theme, replacing any theme registered under the same name.
    pub fn register(mut self, name: impl AsRef<str>, config: GameViewConfig) -> Self {
        let key = normalize(name.as_ref());
        if self.themes.insert(key.clone(), config).is_some() {
            log::warn!("Theme '{}' registered twice, keeping the last one", key);
        }
        self
    }

    /// Names of all registered themes in ascending order.
    pub fn list_themes(&self) -> Vec<String> {
        let mut names: Vec<String> = self.themes.keys().cloned().collect();
        names.sort();
        names
    }

    /// Whether a theme is registered under `name` (after normalization).
    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(&normalize(name))
    }

    /// Look up a theme by name, ignoring case and surrounding whitespace.
    ///
    /// The returned configuration is rebuilt from the serialized canonical
    /// entry and shares nothing with the registry.
    pub fn get_theme(&self, name: &str) -> ThemeResult<GameViewConfig> {
        let key = normalize(name);
        let Some(theme) = self.themes.get(&key) else {
            return Err(ThemeError::unknown_theme(name, self.list_themes()));
        };
        log::debug!("Resolved theme '{}'", key);
        deserialize(&serialize(theme))
    }

    /// Iterate over `(name, config)` in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GameViewConfig)> {
        self.themes.iter().map(|(name, config)| (name.as_str(), config))
    }

    /// Number of registered themes.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Whether the registry has no themes.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
