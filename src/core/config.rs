//! Configuration file management.
//!
//! Reads the optional `.envdoc.toml` from the working directory. Every
//! section and field has a default, so a missing file is not an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Project configuration stored in `.envdoc.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Env file discovery for `doctor` and `engineer`
    pub discovery: Discovery,
    /// Report output
    pub report: ReportConfig,
}

/// `[discovery]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Discovery {
    /// Extra file name suffixes to skip, on top of the built-in list
    pub exclude: Vec<String>,
}

/// `[report]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Directory for `--save` reports; the working directory when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Config {
    /// Load `.envdoc.toml` from the current directory
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the TOML is malformed.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("."))
    }

    /// Load `.envdoc.toml` from `dir`, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file exists but cannot be
    /// read, or `ConfigError::Parse` if the TOML is malformed.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let path = dir.join(constants::CONFIG_FILE);

        if !path.is_file() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        debug!(
            excludes = config.discovery.exclude.len(),
            report_dir = ?config.report.dir,
            "config loaded"
        );
        Ok(config)
    }

    /// Directory where saved reports go
    pub fn report_dir(&self) -> &Path {
        self.report.dir.as_deref().unwrap_or_else(|| Path::new("."))
    }
}
