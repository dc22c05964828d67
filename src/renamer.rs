//! Renumber every file in a directory as `<n><ext>` in natural order

use anyhow::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::listing::list_sorted;

/// A single planned rename inside one directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOp {
    pub from: String,
    pub to: String,
}

impl RenameOp {
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// What happened to one entry
#[derive(Debug)]
pub enum RenameOutcome {
    Renamed,
    AlreadyNamed,
    Failed(io::Error),
}

/// Per-entry results, in the order the entries were processed
#[derive(Debug, Default)]
pub struct RenameReport {
    pub entries: Vec<(RenameOp, RenameOutcome)>,
}

impl RenameReport {
    pub fn renamed(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::Renamed))
    }

    pub fn already_named(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::AlreadyNamed))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&RenameOutcome) -> bool) -> usize {
        self.entries.iter().filter(|(_, o)| pred(o)).count()
    }
}

/// Extension including the dot ("a.tar.gz" -> ".gz"), empty when there is none
fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Target names for already-sorted filenames: 1-based index plus original extension
pub fn plan(sorted_names: &[String]) -> Vec<RenameOp> {
    sorted_names
        .iter()
        .enumerate()
        .map(|(i, name)| RenameOp {
            from: name.clone(),
            to: format!("{}{}", i + 1, extension_of(name)),
        })
        .collect()
}

/// Where an entry sits after the first pass of [`execute`]
enum Staged {
    InPlace,
    Moved(PathBuf),
    Failed(io::Error),
}

/// Hidden name in `dir` that nothing currently uses
fn staging_path(dir: &Path, index: usize) -> PathBuf {
    let pid = std::process::id();
    let mut attempt = 0usize;
    loop {
        let candidate = dir.join(format!(".comicctl-rename-{}-{}-{}", pid, index, attempt));
        if !candidate.exists() {
            return candidate;
        }
        attempt += 1;
    }
}

/// Move a staged entry to its final name. An occupied target is never
/// overwritten; the entry goes back to its old name instead.
fn finish(dir: &Path, op: &RenameOp, staged: &Path) -> RenameOutcome {
    let to = dir.join(&op.to);
    let result = if to.exists() {
        Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists", op.to),
        ))
    } else {
        fs::rename(staged, &to)
    };

    match result {
        Ok(()) => RenameOutcome::Renamed,
        Err(err) => {
            let from = dir.join(&op.from);
            if from.exists() {
                warn!(
                    file = %op.from,
                    kept_as = %staged.display(),
                    "original name taken, left under staging name"
                );
            } else if let Err(restore) = fs::rename(staged, &from) {
                warn!(
                    file = %op.from,
                    kept_as = %staged.display(),
                    error = %restore,
                    "couldn't restore original name"
                );
            }
            RenameOutcome::Failed(err)
        }
    }
}

/// Apply `ops` in two passes: every entry that needs a new name first moves
/// to a hidden staging name, then each moves to its target. Names that
/// collide with another entry's target (`0.txt -> 1.txt` while `1.txt ->
/// 2.txt`) therefore never clobber each other. A failed entry is recorded
/// and the rest still run; nothing is rolled back.
pub fn execute(dir: &Path, ops: Vec<RenameOp>) -> RenameReport {
    let staged: Vec<Staged> = ops
        .iter()
        .enumerate()
        .map(|(i, op)| {
            if op.is_noop() {
                return Staged::InPlace;
            }
            let tmp = staging_path(dir, i);
            match fs::rename(dir.join(&op.from), &tmp) {
                Ok(()) => Staged::Moved(tmp),
                Err(err) => Staged::Failed(err),
            }
        })
        .collect();

    let mut report = RenameReport::default();
    for (op, stage) in ops.into_iter().zip(staged) {
        let outcome = match stage {
            Staged::InPlace => RenameOutcome::AlreadyNamed,
            Staged::Failed(err) => RenameOutcome::Failed(err),
            Staged::Moved(tmp) => finish(dir, &op, &tmp),
        };

        debug!(from = %op.from, to = %op.to, ?outcome, "rename");
        report.entries.push((op, outcome));
    }

    report
}

/// List, sort, plan and rename everything in `dir`
pub fn rename_all(dir: &Path) -> Result<RenameReport> {
    let names = list_sorted(dir)?;
    Ok(execute(dir, plan(&names)))
}
