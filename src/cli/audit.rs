//! Reporting commands: `audit`, `compare` and `doctor`.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::output;
use crate::cli::report::{self, ReportArgs};
use crate::core::config::Config;
use crate::core::diff::{self, FileSets};
use crate::core::discover;
use crate::core::domain::RecordSet;
use crate::core::report as markdown;
use crate::error::Result;

/// Report duplicated keys in one file.
pub fn audit(file: &Path, args: &ReportArgs) -> Result<()> {
    info!(file = %file.display(), "auditing");

    let set = RecordSet::load(file)?;
    let duplicates = diff::find_duplicates(set.records());

    let doc = markdown::audit(file, &duplicates, set.len());
    report::emit(&doc, "envdoc-audit", args)
}

/// Report keys missing from each of several files.
pub fn compare(files: &[PathBuf], args: &ReportArgs) -> Result<()> {
    info!(files = files.len(), "comparing");

    let sets = load_all(files)?;
    report::emit(&markdown::compare(&sets), "envdoc-compare", args)
}

/// Audit and compare every env file in `dir`.
pub fn doctor(dir: &Path, args: &ReportArgs) -> Result<()> {
    info!(dir = %dir.display(), "running doctor");

    let config = Config::load()?;
    let files = discover::find_env_files(dir, &config.discovery.exclude)?;
    if files.is_empty() {
        output::warn(&format!("no env files found in {}", dir.display()));
        return Ok(());
    }

    let sets = load_all(&files)?;
    report::emit(&markdown::doctor(&sets), "envdoc-doctor", args)
}

/// Load every file, keyed by path.
pub(crate) fn load_all(files: &[PathBuf]) -> Result<FileSets> {
    let mut sets = FileSets::new();
    for path in files {
        sets.insert(path.clone(), RecordSet::load(path)?);
    }
    Ok(sets)
}
