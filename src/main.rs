mod cli;
mod comic;
mod commands;
mod config;
mod error;
mod listing;
mod natsort;
mod prompt;
mod renamer;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {:#}", "Error".red().bold(), err);
            ExitCode::from(error::exit_code_for(&err))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Create {
            comics_root,
            output,
            replace,
        } => {
            commands::create::run(comics_root.as_ref(), output.as_ref(), replace, cli.quiet)?;
        }
        Commands::Rename { dir, yes } => {
            commands::rename::run(&dir, yes)?;
        }
    }

    Ok(())
}

/// Diagnostics go to stderr; RUST_LOG overrides the verbosity flag
fn init_tracing(verbose: bool) {
    let default = if verbose { "comicctl=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
