//! Whole-file writes.

#[cfg(unix)]
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Write `contents` to `path`, readable by the owner only on Unix.
///
/// Used for anything that may hold secrets: env files and decrypted output.
pub fn write_private(path: &Path, contents: &[u8]) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .mode(0o600)
            .open(path)?;
        file.write_all(contents)?;
        file.flush()?;

        // Ensure secure permissions even when overwriting an existing file.
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    }

    #[cfg(not(unix))]
    {
        std::fs::write(path, contents)?;
    }

    Ok(())
}

/// Write `contents` to `path` with default permissions.
pub fn write(path: &Path, contents: &[u8]) -> Result<()> {
    std::fs::write(path, contents)?;
    Ok(())
}

/// Refuse to clobber an existing `path` unless `force` is set.
///
/// # Errors
///
/// Returns `Error::OutputExists` when the file exists and `force` is false.
pub fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::OutputExists(path.to_path_buf()));
    }
    Ok(())
}

/// `path` with the extension of its file name swapped for `ext`.
///
/// Everything from the last `.` of the file name is replaced, so a dotfile
/// like `.env` becomes just `ext`. The parent directory is kept.
pub fn swap_extension(path: &Path, ext: &str) -> PathBuf {
    let name = file_name(path);
    let stem = match name.rfind('.') {
        Some(idx) => &name[..idx],
        None => name.as_str(),
    };
    path.with_file_name(format!("{}{}", stem, ext))
}

/// `path` with `suffix` appended to its file name.
pub fn append_suffix(path: &Path, suffix: &str) -> PathBuf {
    path.with_file_name(format!("{}{}", file_name(path), suffix))
}

/// `path` without `suffix`, or with `fallback` appended when it lacks it.
pub fn strip_suffix_or(path: &Path, suffix: &str, fallback: &str) -> PathBuf {
    let name = file_name(path);
    match name.strip_suffix(suffix) {
        Some(stripped) if !stripped.is_empty() => path.with_file_name(stripped),
        _ => append_suffix(path, fallback),
    }
}

/// `path` with `suffix` (when present) replaced by `replacement`.
pub fn replace_suffix(path: &Path, suffix: &str, replacement: &str) -> PathBuf {
    let name = file_name(path);
    let base = name.strip_suffix(suffix).unwrap_or(&name);
    path.with_file_name(format!("{}{}", base, replacement))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
