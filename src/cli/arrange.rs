//! In-place rewrites of a single file: `arrange` and `clear-values`.

use std::path::Path;

use tracing::info;

use crate::cli::{output, prompt};
use crate::core::domain::RecordSet;
use crate::error::Result;

/// Sort `file` by key and group it by prefix.
pub fn arrange(file: &Path, yes: bool) -> Result<()> {
    info!(file = %file.display(), "arranging");

    let set = RecordSet::load(file)?;
    prompt::confirm(
        &format!("this will rewrite {} in sorted order", file.display()),
        yes,
    )?;

    let count = set.len();
    set.arranged().save()?;

    output::success(&format!("arranged {} ({} keys)", output::path(file), count));
    Ok(())
}

/// Empty every value of `file`, keeping keys, comments and layout.
pub fn clear(file: &Path, yes: bool) -> Result<()> {
    info!(file = %file.display(), "clearing values");

    let set = RecordSet::load(file)?;
    prompt::confirm(
        &format!("this will erase every value in {}", file.display()),
        yes,
    )?;

    set.cleared().save()?;

    output::success(&format!("cleared {} values in {}", set.len(), output::path(file)));
    Ok(())
}
