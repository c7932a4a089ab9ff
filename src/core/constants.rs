//! Constants used throughout envdoc.
//!
//! Centralizes file names, cipher parameters and format markers.

/// Project configuration file name.
pub const CONFIG_FILE: &str = ".envdoc.toml";

/// Default environment file name.
pub const ENV_FILE: &str = ".env";

/// Prefix shared by environment-specific files (`.env.production`, ...).
pub const ENV_FILE_PREFIX: &str = ".env.";

/// Suffixes of derived files that discovery never treats as env files.
pub const EXCLUDED_SUFFIXES: &[&str] = &[
    ".bak",
    ".json",
    ".yaml",
    ".yml",
    ".hashed",
    ".b64",
    ".encrypted",
    ".enc",
];

/// Default output of `create-example`.
pub const EXAMPLE_FILE: &str = ".env.example";

/// Default output of `create-schema`.
pub const SCHEMA_FILE: &str = ".env.schema.json";

/// Extension appended by `encrypt`.
pub const ENCRYPTED_EXT: &str = ".encrypted";

/// Extension appended by `base64 encode`.
pub const BASE64_EXT: &str = ".b64";

/// `$schema` value of generated schema documents.
pub const SCHEMA_DRAFT: &str = "http://json-schema.org/draft-07/schema#";

/// Salt length in bytes.
pub const SALT_SIZE: usize = 32;

/// AES block and IV length in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Derived key length in bytes (AES-256).
pub const KEY_SIZE: usize = 32;

/// PBKDF2-HMAC-SHA256 rounds.
pub const PBKDF2_ITERATIONS: u32 = 10_000;
