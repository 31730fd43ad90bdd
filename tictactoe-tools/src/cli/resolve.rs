use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use tictactoe_services::ThemeSelection;
use tictactoe_theme::interchange::to_json_string;
use tictactoe_theme::ThemeRegistry;

#[derive(Debug, Clone, Default, Args)]
pub struct ResolveArgs {
    /// Registered theme to use. Overrides TICTACTOE_THEME.
    #[arg(long)]
    theme: Option<String>,
    /// Theme file to load. Overrides TICTACTOE_THEME_FILE and any theme name.
    #[arg(long)]
    theme_file: Option<PathBuf>,
    /// Print the default configuration instead of failing when loading fails.
    #[arg(long)]
    fallback: bool,
}

impl ResolveArgs {
    fn selection(&self) -> ThemeSelection {
        ThemeSelection {
            theme_file: self.theme_file.clone(),
            theme_name: self.theme.clone(),
        }
    }

    pub async fn execute(self) -> Result<ExitCode> {
        let registry = ThemeRegistry::builtin();
        let selection = self.selection();

        let config = if self.fallback {
            selection.resolve_or_default(&registry).await
        } else {
            selection.resolve(&registry).await?
        };

        println!("{}", to_json_string(&config, true)?);
        Ok(ExitCode::SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_services::ThemeSource;

    #[test]
    fn test_selection_prefers_file() {
        let args = ResolveArgs {
            theme: Some("dark".to_string()),
            theme_file: Some(PathBuf::from("custom.json")),
            fallback: false,
        };
        assert_eq!(
            args.selection().source_with(|_| None),
            ThemeSource::File(PathBuf::from("custom.json"))
        );
    }
}
