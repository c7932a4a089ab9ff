//! Command-line interface.

pub mod arrange;
pub mod audit;
pub mod completions;
pub mod convert;
pub mod create;
pub mod crypto;
pub mod output;
pub mod prompt;
pub mod report;
pub mod sync;
pub mod validate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::core::constants::{EXAMPLE_FILE, SCHEMA_FILE};
use crate::core::convert::Format;
use crate::error::Result;
use crypto::Base64Action;
use report::ReportArgs;

/// envdoc - keep your .env files honest.
#[derive(Parser)]
#[command(
    name = "envdoc",
    about = "Audit, arrange, sync, convert, validate and encrypt .env files",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Write a copy of an env file with every value emptied
    CreateExample {
        /// Source env file
        file: PathBuf,
        /// Output path
        #[arg(default_value = EXAMPLE_FILE)]
        output: PathBuf,
        /// Overwrite an existing output file
        #[arg(short, long)]
        force: bool,
    },

    /// Generate a JSON schema from an env file
    CreateSchema {
        /// Source env file
        file: PathBuf,
        /// Output path
        #[arg(default_value = SCHEMA_FILE)]
        output: PathBuf,
        /// Overwrite an existing output file
        #[arg(short, long)]
        force: bool,
    },

    /// Sort keys and group them by prefix, in place
    Arrange {
        /// Env file to rewrite
        file: PathBuf,
        /// Skip the confirmation PIN
        #[arg(short, long)]
        yes: bool,
    },

    /// Empty every value, in place
    ClearValues {
        /// Env file to rewrite
        file: PathBuf,
        /// Skip the confirmation PIN
        #[arg(short, long)]
        yes: bool,
    },

    /// Report duplicated keys
    Audit {
        /// Env file to audit
        file: PathBuf,
        #[command(flatten)]
        report: ReportArgs,
    },

    /// Report keys missing across files
    Compare {
        /// Env files to compare
        #[arg(required = true, num_args = 2..)]
        files: Vec<PathBuf>,
        #[command(flatten)]
        report: ReportArgs,
    },

    /// Add missing keys so every file has the same set
    Sync {
        /// Env files to synchronize
        #[arg(required = true, num_args = 2..)]
        files: Vec<PathBuf>,
        /// Skip the confirmation PIN
        #[arg(short, long)]
        yes: bool,
        /// Show what would change without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Audit and compare every env file in a directory
    Doctor {
        /// Directory to scan
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
        #[command(flatten)]
        report: ReportArgs,
    },

    /// Synchronize and arrange every env file in a directory
    Engineer {
        /// Directory to scan
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
        /// Skip the confirmation PIN
        #[arg(short, long)]
        yes: bool,
        /// Show what would change without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Check an env file against a JSON schema
    Validate {
        /// Env file to check
        file: PathBuf,
        /// Schema file
        schema: PathBuf,
        /// Exit with an error when discrepancies are found
        #[arg(long)]
        check: bool,
        #[command(flatten)]
        report: ReportArgs,
    },

    /// Convert an env file to JSON or YAML
    To {
        /// Target format
        #[arg(value_enum)]
        format: Format,
        /// Source env file
        file: PathBuf,
        /// Output path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert a JSON or YAML file to an env file
    From {
        /// Source .json, .yaml or .yml file
        file: PathBuf,
        /// Output path
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Overwrite an existing output file
        #[arg(short, long)]
        force: bool,
    },

    /// Base64-encode or decode a file
    Base64 {
        #[arg(value_enum)]
        action: Base64Action,
        /// Input file
        file: PathBuf,
        /// Output path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the SHA-256 digest of a file
    Hash {
        /// Input file
        file: PathBuf,
    },

    /// Encrypt a file with a password
    Encrypt {
        /// Input file
        file: PathBuf,
        /// Output path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decrypt a file produced by `encrypt`
    Decrypt {
        /// Encrypted file
        file: PathBuf,
        /// Output path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Execute a command.
pub fn execute(command: Command) -> Result<()> {
    use Command::*;

    match command {
        CreateExample {
            file,
            output,
            force,
        } => create::example(&file, &output, force),
        CreateSchema {
            file,
            output,
            force,
        } => create::schema(&file, &output, force),
        Arrange { file, yes } => arrange::arrange(&file, yes),
        ClearValues { file, yes } => arrange::clear(&file, yes),
        Audit { file, report } => audit::audit(&file, &report),
        Compare { files, report } => audit::compare(&files, &report),
        Sync {
            files,
            yes,
            dry_run,
        } => sync::sync(&files, yes, dry_run),
        Doctor { dir, report } => audit::doctor(&dir, &report),
        Engineer { dir, yes, dry_run } => sync::engineer(&dir, yes, dry_run),
        Validate {
            file,
            schema,
            check,
            report,
        } => validate::execute(&file, &schema, check, &report),
        To {
            format,
            file,
            output,
        } => convert::to(format, &file, output),
        From {
            file,
            output,
            force,
        } => convert::from(&file, output, force),
        Base64 {
            action,
            file,
            output,
        } => crypto::base64(action, &file, output),
        Hash { file } => crypto::hash(&file),
        Encrypt { file, output } => crypto::encrypt(&file, output),
        Decrypt { file, output } => crypto::decrypt(&file, output),
        Completions { shell } => completions::execute(shell),
    }
}
