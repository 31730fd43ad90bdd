mod codegen;
mod export;
mod list;
mod resolve;

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use codegen::CodegenArgs;
use export::ExportArgs;
use list::ListArgs;
use log::LevelFilter;
use resolve::ResolveArgs;
use tictactoe_services::io_helpers::write_file;

#[derive(Debug, Clone, Parser)]
#[command(name = "tictactoe-theme", version, about = "Inspect, export and generate Tic Tac Toe themes")]
pub struct CliArgs {
    #[command(subcommand)]
    pub subcommand: Option<RootSubcommand>,
    /// Increase logging verbosity
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl CliArgs {
    pub async fn execute(self) -> Result<ExitCode> {
        Self::setup_logging(self.verbose);

        let subcommand = self.subcommand.unwrap_or_default();

        subcommand.execute().await
    }

    fn setup_logging(verbose: u8) {
        let level = match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };

        // RUST_LOG still wins when set.
        let _ = env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .try_init();
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum RootSubcommand {
    /// List the registered theme names
    List(ListArgs),
    /// Print a registered theme as JSON
    Export(ExportArgs),
    /// Resolve the theme the game would use and print it as JSON
    Resolve(ResolveArgs),
    /// Generate Rust source that rebuilds theme configurations
    Codegen(CodegenArgs),
}

impl RootSubcommand {
    pub async fn execute(self) -> Result<ExitCode> {
        match self {
            RootSubcommand::List(args) => args.execute().await,
            RootSubcommand::Export(args) => args.execute().await,
            RootSubcommand::Resolve(args) => args.execute().await,
            RootSubcommand::Codegen(args) => args.execute().await,
        }
    }
}

impl Default for RootSubcommand {
    fn default() -> Self {
        Self::List(Default::default())
    }
}

/// Write `content` to `output`, or to stdout when no file is given.
async fn emit(output: Option<&Path>, content: String) -> Result<()> {
    match output {
        Some(path) => {
            write_file(path, content)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        },
        None => print!("{content}"),
    }
    Ok(())
}
