use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::natsort::sort_natural;

/// Names of the regular files directly inside `dir`, in natural order.
///
/// Hidden entries (leading `.`) and names that aren't valid UTF-8 are skipped.
pub fn list_sorted(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = entry.with_context(|| format!("Failed to list {:?}", dir))?;

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            warn!(path = %entry.path().display(), "skipping non UTF-8 filename");
            continue;
        };

        if name.starts_with('.') {
            debug!(name, "skipping hidden file");
            continue;
        }

        names.push(name.to_string());
    }

    sort_natural(&mut names);
    debug!(dir = %dir.display(), count = names.len(), "listed directory");
    Ok(names)
}
