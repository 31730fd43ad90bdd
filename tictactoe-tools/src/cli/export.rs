use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use tictactoe_theme::interchange::to_json_string;
use tictactoe_theme::ThemeRegistry;

use super::emit;

#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Name of the registered theme, case-insensitive.
    name: String,
    /// Write the JSON to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Emit JSON on a single line.
    #[arg(long)]
    compact: bool,
}

impl ExportArgs {
    pub async fn execute(self) -> Result<ExitCode> {
        let theme = ThemeRegistry::builtin().get_theme(&self.name)?;
        let mut json = to_json_string(&theme, !self.compact)?;
        json.push('\n');

        emit(self.output.as_deref(), json).await?;
        Ok(ExitCode::SUCCESS)
    }
}
