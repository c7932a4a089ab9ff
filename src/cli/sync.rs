//! Multi-file rewrites: `sync` and `engineer`.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::audit::load_all;
use crate::cli::{output, prompt};
use crate::core::config::Config;
use crate::core::diff::{self, FileSets};
use crate::core::discover;
use crate::error::Result;

/// Give every file the union of all keys.
pub fn sync(files: &[PathBuf], yes: bool, dry_run: bool) -> Result<()> {
    info!(files = files.len(), dry_run, "synchronizing");

    let sets = load_all(files)?;
    apply(sets, "this will add missing keys to every file", yes, dry_run)
}

/// Synchronize and arrange every env file in `dir`.
pub fn engineer(dir: &Path, yes: bool, dry_run: bool) -> Result<()> {
    info!(dir = %dir.display(), dry_run, "engineering");

    let config = Config::load()?;
    let files = discover::find_env_files(dir, &config.discovery.exclude)?;
    if files.is_empty() {
        output::warn(&format!("no env files found in {}", dir.display()));
        return Ok(());
    }

    let sets = load_all(&files)?;
    apply(
        sets,
        "this will synchronize and arrange every env file",
        yes,
        dry_run,
    )
}

fn apply(sets: FileSets, message: &str, yes: bool, dry_run: bool) -> Result<()> {
    preview(&sets);
    if dry_run {
        output::dimmed("dry run, no files changed");
        return Ok(());
    }

    prompt::confirm(message, yes)?;

    let synced = diff::synchronize(sets);
    for set in synced.values() {
        set.save()?;
    }

    output::success(&format!("synchronized {} files", synced.len()));
    Ok(())
}

fn preview(sets: &FileSets) {
    output::header("Synchronization preview");
    for (path, missing) in diff::missing_by_file(sets) {
        println!("{}: {} keys to add", output::path(&path), missing.len());
        for key in &missing {
            output::list_item(format!("+ {}", output::key(key)));
        }
    }
}
