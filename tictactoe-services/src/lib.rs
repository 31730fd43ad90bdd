// SPDX-License-Identifier: LGPL-3.0-only
//! Loading view configurations from outside the process: theme files,
//! inline payloads and the `TICTACTOE_THEME*` environment variables.
pub mod error;
pub mod io_helpers;
pub mod loader;
pub mod source;

pub use error::PayloadError;
pub use loader::{PayloadFormat, ThemeLoader, THEME_PAYLOAD_ENV_VAR};
pub use source::{ThemeSelection, ThemeSource, THEME_ENV_VAR, THEME_FILE_ENV_VAR};
