//! Conversion between record sets and JSON / YAML documents.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::domain::{EnvRecord, RecordSet};
use crate::error::{ParseError, Result};

/// Target or source document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Infer the format from a file extension (`.json`, `.yaml`, `.yml`).
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnsupportedFormat` for anything else.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(ParseError::UnsupportedFormat(format!(".{}", ext)).into()),
        }
    }

    /// File extension including the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => ".json",
            Self::Yaml => ".yaml",
        }
    }
}

/// Flat key/value map; for duplicated keys the last value wins.
pub fn to_map(set: &RecordSet) -> BTreeMap<String, String> {
    set.records()
        .iter()
        .map(|r| (r.key.clone(), r.value.clone()))
        .collect()
}

/// Pretty JSON object with sorted keys.
pub fn to_json(set: &RecordSet) -> Result<String> {
    serde_json::to_string_pretty(&to_map(set)).map_err(|e| ParseError::Json(e).into())
}

/// `key: value` lines in record order.
///
/// Records flagged `blank_after` are followed by an empty line. When a key
/// repeats, only its last occurrence is written.
pub fn to_yaml(set: &RecordSet) -> String {
    let records = set.records();
    let mut output = String::new();

    for (idx, record) in records.iter().enumerate() {
        if records[idx + 1..].iter().any(|r| r.key == record.key) {
            continue;
        }
        output.push_str(&format!("{}: {}\n", record.key, yaml_scalar(&record.value)));
        if record.blank_after && idx + 1 < records.len() {
            output.push('\n');
        }
    }

    output
}

/// Parse a JSON or YAML mapping into an arranged record set.
///
/// # Errors
///
/// Returns `ParseError::Json` / `ParseError::Yaml` unless the document is a
/// flat mapping of strings.
pub fn from_document(
    text: &str,
    format: Format,
    path: impl Into<PathBuf>,
) -> Result<RecordSet> {
    let map: BTreeMap<String, String> = match format {
        Format::Json => serde_json::from_str(text).map_err(ParseError::Json)?,
        Format::Yaml => serde_yaml::from_str(text).map_err(ParseError::Yaml)?,
    };
    debug!(?format, keys = map.len(), "document parsed");

    let records = map
        .into_iter()
        .map(|(key, value)| EnvRecord::new(key, value))
        .collect();

    Ok(RecordSet::from_records(records, path).arranged())
}

const YAML_SPECIAL: &[char] = &[
    ':', '#', '{', '}', '[', ']', ',', '&', '*', '!', '|', '>', '\'', '"', '%', '@', '`',
];

const YAML_RESERVED: &[&str] = &["true", "false", "yes", "no", "on", "off", "null", "~"];

/// `-` or `?` followed by whitespace or nothing opens a sequence entry or a
/// complex key when it starts a plain scalar.
fn starts_with_indicator(value: &str) -> bool {
    let mut chars = value.chars();
    matches!(chars.next(), Some('-' | '?'))
        && chars.next().map_or(true, char::is_whitespace)
}

fn yaml_scalar(value: &str) -> String {
    let needs_quotes = value.is_empty()
        || value.trim() != value
        || value.contains(YAML_SPECIAL)
        || starts_with_indicator(value)
        || YAML_RESERVED.contains(&value.to_ascii_lowercase().as_str());

    if !needs_quotes {
        return value.to_string();
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            _ => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}
