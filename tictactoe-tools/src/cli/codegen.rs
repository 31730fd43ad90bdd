use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Args;
use tictactoe_services::ThemeLoader;
use tictactoe_theme::codegen::{derive_identifier, render, render_module};
use tictactoe_theme::ThemeRegistry;

use super::emit;

#[derive(Debug, Clone, Args)]
pub struct CodegenArgs {
    /// Serialized theme files (JSON, or TOML by extension).
    files: Vec<PathBuf>,
    /// Registered themes to include. May be repeated.
    #[arg(long = "theme")]
    themes: Vec<String>,
    /// Prefix for generated function names.
    #[arg(long, default_value = "")]
    variable_prefix: String,
    /// Suffix for generated function names.
    #[arg(long, default_value = "_theme")]
    variable_suffix: String,
    /// Write the module to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl CodegenArgs {
    fn identifier(&self, stem: &str) -> String {
        derive_identifier(stem, &self.variable_prefix, &self.variable_suffix)
    }

    pub async fn execute(self) -> Result<ExitCode> {
        if self.files.is_empty() && self.themes.is_empty() {
            bail!("nothing to generate: pass at least one theme file or --theme NAME");
        }

        let mut snippets = Vec::with_capacity(self.files.len() + self.themes.len());

        for path in &self.files {
            let config = ThemeLoader::load_from_file(path)
                .await
                .with_context(|| format!("failed to load {}", path.display()))?;
            let identifier = self.identifier(&file_stem(path));
            log::debug!("Generating {identifier} from {}", path.display());
            snippets.push(render(&config, &identifier, Some(&path.display().to_string())));
        }

        let registry = ThemeRegistry::builtin();
        for name in &self.themes {
            let config = registry.get_theme(name)?;
            let identifier = self.identifier(name);
            log::debug!("Generating {identifier} from theme '{name}'");
            snippets.push(render(&config, &identifier, Some(&format!("theme '{name}'"))));
        }

        emit(self.output.as_deref(), render_module(snippets)).await?;
        Ok(ExitCode::SUCCESS)
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{CliArgs, RootSubcommand};
    use clap::Parser;

    fn parse(args: &[&str]) -> CodegenArgs {
        let args = CliArgs::try_parse_from(args).unwrap();
        match args.subcommand {
            Some(RootSubcommand::Codegen(codegen)) => codegen,
            other => panic!("unexpected subcommand: {other:?}"),
        }
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["tictactoe-theme", "codegen", "themes/my-theme.json"]);
        assert_eq!(args.variable_suffix, "_theme");
        assert_eq!(args.variable_prefix, "");
        assert_eq!(args.identifier(&file_stem(&args.files[0])), "my_theme_theme");
    }

    #[test]
    fn test_repeated_themes_and_prefix() {
        let args = parse(&[
            "tictactoe-theme",
            "codegen",
            "--theme",
            "dark",
            "--theme",
            "light",
            "--variable-prefix",
            "ui",
            "--variable-suffix",
            "",
        ]);
        assert_eq!(args.themes, vec!["dark", "light"]);
        assert_eq!(args.identifier("dark"), "ui_dark");
    }

    #[test]
    fn test_requires_input() {
        let args = parse(&["tictactoe-theme", "codegen"]);
        assert!(smol::block_on(args.execute()).is_err());
    }
}
