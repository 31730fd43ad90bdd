use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use tictactoe_theme::ThemeRegistry;

#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {}

impl ListArgs {
    pub async fn execute(self) -> Result<ExitCode> {
        for name in ThemeRegistry::builtin().list_themes() {
            println!("{name}");
        }
        Ok(ExitCode::SUCCESS)
    }
}
