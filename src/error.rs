//! Error types for envdoc.
//!
//! A single top-level [`Error`] wraps the per-concern enums so callers can
//! match on the category (`Error::Crypto(..)`) or on the exact failure.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("output already exists: {} (use --force to overwrite)", .0.display())]
    OutputExists(PathBuf),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("confirmation required but no terminal is attached")]
    ConfirmationRequired,

    #[error("operation cancelled")]
    Cancelled,

    #[error("{0}")]
    Usage(String),

    #[error("validation failed: {0} discrepancies found")]
    ValidationFailed(usize),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures turning text into structured data.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to parse schema: {0}")]
    Schema(#[source] serde_json::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[source] serde_json::Error),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[source] serde_yaml::Error),

    #[error("unsupported file format '{0}': must be .json, .yaml, or .yml")]
    UnsupportedFormat(String),
}

/// Cipher and encoding failures.
#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("failed to gather randomness: {0}")]
    Random(String),

    #[error("failed to decode base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("encrypted data is too short ({len} bytes, need at least {min})")]
    TooShort { len: usize, min: usize },

    #[error("decryption failed (wrong password?)")]
    DecryptionFailed,
}

/// `.envdoc.toml` failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// A short follow-up suggestion for the user, if one applies.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::Crypto(CryptoError::DecryptionFailed) => {
                Some("check the password; corrupted files fail the same way")
            }
            Error::Crypto(CryptoError::Base64(_)) => Some("the input is not valid base64 text"),
            Error::Crypto(CryptoError::TooShort { .. }) => {
                Some("the input does not look like an envdoc encrypted file")
            }
            Error::ConfirmationRequired => Some("pass --yes to confirm non-interactively"),
            Error::OutputExists(_) => Some("pass --force or choose another output path"),
            Error::Config(_) => Some("fix or remove .envdoc.toml"),
            _ => None,
        }
    }
}
