//! Validate command.

use std::path::Path;

use tracing::info;

use crate::cli::report::{self, ReportArgs};
use crate::core::domain::RecordSet;
use crate::core::report as markdown;
use crate::core::schema;
use crate::error::{Error, Result};

/// Check `file` against `schema_file` and report discrepancies.
///
/// With `check`, any discrepancy turns into `Error::ValidationFailed` after
/// the report is emitted.
pub fn execute(file: &Path, schema_file: &Path, check: bool, args: &ReportArgs) -> Result<()> {
    info!(file = %file.display(), schema = %schema_file.display(), "validating");

    let set = RecordSet::load(file)?;
    if !schema_file.exists() {
        return Err(Error::NotFound(schema_file.to_path_buf()));
    }
    let schema_json = std::fs::read_to_string(schema_file)?;
    let errors = schema::validate(&set, &schema_json)?;

    report::emit(
        &markdown::validate(file, schema_file, &errors),
        "envdoc-validate",
        args,
    )?;

    if check && !errors.is_empty() {
        return Err(Error::ValidationFailed(errors.len()));
    }
    Ok(())
}
