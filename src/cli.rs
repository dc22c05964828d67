use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "comicctl")]
#[command(about = "CLI helpers for preparing web-comic metadata")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase output verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactively build a comic entry and add it to comics.json
    Create {
        /// Directory holding one subdirectory per comic (uses config default if not specified)
        #[arg(long)]
        comics_root: Option<PathBuf>,

        /// Path of comics.json (uses config default if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Replace an existing entry with the same id instead of appending
        #[arg(long)]
        replace: bool,
    },

    /// Rename every file in a directory to 1.ext, 2.ext, ... in natural order
    Rename {
        /// Directory whose files are renamed
        dir: PathBuf,

        /// Skip confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}
