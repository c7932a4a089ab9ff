//! `to` and `from` commands.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::output;
use crate::core::constants::ENV_FILE;
use crate::core::convert::{self, Format};
use crate::core::domain::RecordSet;
use crate::core::files;
use crate::error::{Error, Result};

/// Convert an env file to JSON or YAML.
pub fn to(format: Format, file: &Path, out: Option<PathBuf>) -> Result<()> {
    info!(file = %file.display(), ?format, "converting from env");

    let set = RecordSet::load(file)?;
    let text = match format {
        Format::Json => format!("{}\n", convert::to_json(&set)?),
        Format::Yaml => convert::to_yaml(&set.arranged()),
    };

    let out = out.unwrap_or_else(|| files::swap_extension(file, format.extension()));
    files::write_private(&out, text.as_bytes())?;

    output::success(&format!("converted to {}", output::path(&out)));
    Ok(())
}

/// Convert a JSON or YAML mapping to an env file.
///
/// An existing output file is only replaced with `force`.
pub fn from(file: &Path, out: Option<PathBuf>, force: bool) -> Result<()> {
    info!(file = %file.display(), "converting to env");

    if !file.exists() {
        return Err(Error::NotFound(file.to_path_buf()));
    }
    let format = Format::from_path(file)?;
    let text = std::fs::read_to_string(file)?;

    let out = out.unwrap_or_else(|| files::swap_extension(file, ENV_FILE));
    files::ensure_writable(&out, force)?;
    let set = convert::from_document(&text, format, &out)?;
    set.save()?;

    output::success(&format!(
        "converted {} keys to {}",
        set.len(),
        output::path(&out)
    ));
    Ok(())
}
