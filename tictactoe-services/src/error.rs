// SPDX-License-Identifier: LGPL-3.0-only

//! Theme payload loading errors.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tictactoe_theme::ThemeError;

/// Errors that can occur when loading a view configuration from outside the process.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The file behind a payload could not be found or read.
    #[error("Theme source {} is unreadable: {source}", .path.display())]
    UnreadableSource {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A TOML theme file is not valid TOML.
    #[error("Failed to parse TOML theme file {}: {details}", .path.display())]
    Toml {
        /// The file that failed to parse.
        path: PathBuf,
        /// Parser message.
        details: String,
    },

    /// The payload was read but names an unknown theme or has the wrong shape.
    #[error(transparent)]
    Theme(#[from] ThemeError),
}

impl PayloadError {
    /// Create an unreadable source error.
    pub fn unreadable(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::UnreadableSource {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a TOML parse error.
    pub fn toml(path: impl AsRef<Path>, details: impl Into<String>) -> Self {
        Self::Toml {
            path: path.as_ref().to_path_buf(),
            details: details.into(),
        }
    }
}
