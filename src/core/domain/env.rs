//! RecordSet type.
//!
//! Represents a parsed .env file as an ordered list of records.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::record::EnvRecord;
use crate::core::{arrange, files};
use crate::error::{Error, Result};

/// A parsed .env file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<EnvRecord>,
    path: PathBuf,
}

impl RecordSet {
    /// Parse an .env file from disk
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if the file is missing, `Error::Io` if it
    /// cannot be read. Malformed lines never fail.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading env file");

        if !path.exists() {
            return Err(Error::NotFound(path.to_path_buf()));
        }
        let contents = std::fs::read_to_string(path)?;
        let set = Self::parse(&contents, path);

        debug!(records = set.len(), "env file parsed");
        Ok(set)
    }

    /// Parse .env text.
    ///
    /// - `#` lines become the pending comment for the next record
    /// - blank lines clear the pending comment
    /// - `KEY=value` lines split on the first `=`, both sides trimmed
    /// - anything else (no `=`, or an empty key) is skipped
    pub fn parse(contents: &str, path: impl Into<PathBuf>) -> Self {
        let mut records = Vec::new();
        let mut pending: Option<&str> = None;

        for line in contents.lines() {
            let line = line.trim();

            if line.starts_with('#') {
                pending = Some(line);
                continue;
            }

            if line.is_empty() {
                pending = None;
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                if key.is_empty() {
                    continue;
                }
                records.push(EnvRecord {
                    key: key.to_string(),
                    value: value.trim().to_string(),
                    comment: pending.take().unwrap_or_default().to_string(),
                    blank_after: false,
                });
            }
        }

        Self {
            records,
            path: path.into(),
        }
    }

    /// Create from already built records
    pub fn from_records(records: Vec<EnvRecord>, path: impl Into<PathBuf>) -> Self {
        Self {
            records,
            path: path.into(),
        }
    }

    /// Write the env file to disk
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        debug!(path = %self.path.display(), records = self.len(), "saving env file");
        files::write_private(&self.path, self.to_env_string().as_bytes())
    }

    /// Sorted and grouped by key prefix
    pub fn arranged(self) -> Self {
        Self {
            records: arrange::arrange(self.records),
            path: self.path,
        }
    }

    /// Keys and comments kept, values emptied, separators dropped
    pub fn to_example(&self) -> Self {
        let records = self
            .records
            .iter()
            .map(|r| EnvRecord {
                key: r.key.clone(),
                value: String::new(),
                comment: r.comment.clone(),
                blank_after: false,
            })
            .collect();

        Self {
            records,
            path: self.path.clone(),
        }
    }

    /// Keys, comments and separators kept, values emptied
    pub fn cleared(&self) -> Self {
        let records = self
            .records
            .iter()
            .map(|r| EnvRecord {
                value: String::new(),
                ..r.clone()
            })
            .collect();

        Self {
            records,
            path: self.path.clone(),
        }
    }

    /// Append a record at the end
    pub fn push(&mut self, record: EnvRecord) {
        self.records.push(record);
    }

    /// Get the first value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.records
            .iter()
            .find(|r| r.key == key)
            .map(|r| r.value.as_str())
    }

    /// All records in order
    pub fn records(&self) -> &[EnvRecord] {
        &self.records
    }

    /// Keys in record order, duplicates included
    pub fn keys(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.key.as_str()).collect()
    }

    /// Distinct keys
    pub fn key_set(&self) -> HashSet<&str> {
        self.records.iter().map(|r| r.key.as_str()).collect()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// File path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize to .env format string
    ///
    /// Values are written literally, without quoting.
    pub fn to_env_string(&self) -> String {
        let mut output = String::new();

        for record in &self.records {
            if !record.comment.is_empty() {
                output.push_str(&record.comment);
                output.push('\n');
            }
            output.push_str(&format!("{}={}\n", record.key, record.value));
            if record.blank_after {
                output.push('\n');
            }
        }

        output
    }
}

impl std::fmt::Display for RecordSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_env_string())
    }
}
