//! Env file discovery.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::constants::{ENV_FILE, ENV_FILE_PREFIX, EXCLUDED_SUFFIXES};
use crate::error::Result;

/// Whether a file name denotes an env file.
///
/// Matches `.env` and `.env.<anything>`, minus derived artifacts such as
/// `.env.json` or `.env.encrypted` and any `extra_excludes` suffix.
pub fn is_env_file_name(name: &str, extra_excludes: &[String]) -> bool {
    let candidate = name == ENV_FILE
        || (name.len() > ENV_FILE_PREFIX.len() && name.starts_with(ENV_FILE_PREFIX));

    candidate
        && !EXCLUDED_SUFFIXES.iter().any(|s| name.ends_with(s))
        && !extra_excludes.iter().any(|s| name.ends_with(s.as_str()))
}

/// Regular env files directly inside `dir`, sorted by path.
///
/// # Errors
///
/// Returns `Error::Io` if the directory cannot be read.
pub fn find_env_files(dir: &Path, extra_excludes: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        if is_env_file_name(&name.to_string_lossy(), extra_excludes) {
            files.push(entry.path());
        }
    }

    files.sort();
    debug!(dir = %dir.display(), found = files.len(), "discovered env files");
    Ok(files)
}
