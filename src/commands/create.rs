use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::comic::{AddMode, Comic, ComicBuilder, ComicStore};
use crate::config::Config;
use crate::prompt::{LinePrompter, Prompter};

/// Run the create command - ask the questions, then add the result to the store
pub fn run(
    comics_root_override: Option<&PathBuf>,
    output_override: Option<&PathBuf>,
    replace: bool,
    quiet: bool,
) -> Result<()> {
    let config = Config::load().context("Failed to load config")?;
    let comics_root = config.comics_root(comics_root_override);
    let output = config.output(output_override);
    debug!(comics_root = %comics_root.display(), output = %output.display(), "create");

    let mut prompter = LinePrompter::stdio();
    prompter.info(
        "Welcome! Please answer the following questions to create your comic data object.",
    )?;

    let comic = ComicBuilder::new(&mut prompter, &comics_root, &config.builder.vtt_pattern).run()?;

    let mode = if replace {
        AddMode::Replace
    } else {
        AddMode::Append
    };
    save(&output, comic, mode, quiet)
}

fn save(output: &Path, comic: Comic, mode: AddMode, quiet: bool) -> Result<()> {
    let pretty = serde_json::to_string_pretty(&comic).context("Failed to serialize comic")?;

    let mut store = ComicStore::open(output)?;
    debug!(existed = store.existed(), comics = store.comics.len(), "store ready");

    if mode == AddMode::Append && store.contains_id(&comic.id) {
        println!(
            "{}: {} already has a comic with id {}; adding another entry (use {} to overwrite it).",
            "Note".yellow(),
            output.display(),
            comic.id.cyan(),
            "--replace".cyan()
        );
    }

    let replaced = store.add(&comic, mode, chrono::Utc::now())?;

    if let Err(err) = store.save(output) {
        eprintln!("{}", pretty);
        eprintln!("But you still can simply copy the data :)");
        return Err(err);
    }

    if !quiet {
        println!("Your comic data looks as follows:");
        println!("{}", pretty);
    }

    let verb = if replaced { "replaced" } else { "saved the new comic" };
    println!(
        "{} Successfully {} in {}!",
        "✓".green(),
        verb,
        output.display()
    );

    Ok(())
}
