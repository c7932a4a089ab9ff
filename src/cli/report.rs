//! Report destination handling shared by the reporting commands.

use std::path::PathBuf;

use chrono::Local;
use clap::Args;
use tracing::debug;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::files;
use crate::error::Result;

/// Where a generated report goes.
#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Write the report to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write the report to a timestamped file
    #[arg(long, conflicts_with = "output")]
    pub save: bool,
}

/// Print `report` or write it where `args` asks.
///
/// Timestamped names look like `envdoc-audit-20240131-154500.md` and land in
/// the configured report directory.
pub fn emit(report: &str, prefix: &str, args: &ReportArgs) -> Result<()> {
    let target = match (&args.output, args.save) {
        (Some(path), _) => path.clone(),
        (None, true) => {
            let config = Config::load()?;
            let dir = config.report_dir();
            std::fs::create_dir_all(dir)?;
            dir.join(format!(
                "{}-{}.md",
                prefix,
                Local::now().format("%Y%m%d-%H%M%S")
            ))
        }
        (None, false) => {
            print!("{}", report);
            return Ok(());
        }
    };

    debug!(path = %target.display(), "writing report");
    files::write(&target, report.as_bytes())?;
    output::success(&format!("report saved to {}", output::path(&target)));
    Ok(())
}
