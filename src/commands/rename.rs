use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::prompt::{LinePrompter, Prompter};
use crate::renamer::{rename_all, RenameOutcome, RenameReport};

/// Run the rename command
pub fn run(dir: &Path, yes: bool) -> Result<()> {
    if !dir.is_dir() {
        eprintln!(
            "{}: The requested folder doesn't exist: {}",
            "Error".red().bold(),
            dir.display()
        );
        return Ok(());
    }

    let mut prompter = LinePrompter::stdio();
    if !yes && !confirm(&mut prompter, dir)? {
        println!("Alrighty, see you next time!");
        return Ok(());
    }

    let report = rename_all(dir)?;
    print_report(&report);
    Ok(())
}

/// Keep asking until the operator answers y or n
fn confirm<P: Prompter>(prompter: &mut P, dir: &Path) -> Result<bool> {
    let question = format!(
        "Do you really want to rename all files in the directory {}?",
        dir.display()
    );
    loop {
        if let Some(answer) = prompter.ask_yes_no(&question)? {
            return Ok(answer);
        }
    }
}

fn print_report(report: &RenameReport) {
    if report.entries.is_empty() {
        println!("No files to rename.");
        return;
    }

    for (op, outcome) in &report.entries {
        match outcome {
            RenameOutcome::Renamed => {
                println!("{} successfully renamed to {}", op.from, op.to.green())
            }
            RenameOutcome::AlreadyNamed => {
                println!("File {} already has the correct name.", op.from)
            }
            RenameOutcome::Failed(err) => eprintln!(
                "{} while renaming {} to {}: {}",
                "Error".red().bold(),
                op.from,
                op.to,
                err
            ),
        }
    }

    println!();
    if report.failed() == 0 {
        println!(
            "{} All files successfully renamed! Bye! :)",
            "Done!".green().bold()
        );
    } else {
        println!(
            "{} {} renamed, {} already correct, {} failed",
            "Done.".yellow().bold(),
            report.renamed(),
            report.already_named(),
            report.failed()
        );
    }
}
