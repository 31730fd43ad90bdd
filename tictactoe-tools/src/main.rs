mod cli;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use cli::CliArgs;

fn main() -> Result<ExitCode> {
    let cli = CliArgs::parse();

    smol::block_on(cli.execute())
}
