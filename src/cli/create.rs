//! `create-example` and `create-schema` commands.

use std::path::Path;

use tracing::info;

use crate::cli::output;
use crate::core::domain::RecordSet;
use crate::core::{files, schema};
use crate::error::Result;

/// Write a copy of `file` with every value emptied.
pub fn example(file: &Path, out: &Path, force: bool) -> Result<()> {
    info!(file = %file.display(), out = %out.display(), "creating example file");

    files::ensure_writable(out, force)?;
    let set = RecordSet::load(file)?;
    files::write(out, set.to_example().to_env_string().as_bytes())?;

    output::success(&format!("example file created: {}", output::path(out)));
    Ok(())
}

/// Write a JSON schema describing the keys of `file`.
pub fn schema(file: &Path, out: &Path, force: bool) -> Result<()> {
    info!(file = %file.display(), out = %out.display(), "creating schema");

    files::ensure_writable(out, force)?;
    let set = RecordSet::load(file)?;
    let json = schema::generate_json(&set)?;
    files::write(out, format!("{}\n", json).as_bytes())?;

    output::success(&format!(
        "schema created: {} ({} keys)",
        output::path(out),
        set.key_set().len()
    ));
    Ok(())
}
