//! envdoc - audit, arrange, sync, convert, validate and encrypt .env files.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── create        # create-example, create-schema
//! │   ├── arrange       # arrange, clear-values
//! │   ├── audit         # audit, compare, doctor
//! │   ├── sync          # sync, engineer
//! │   ├── validate      # Schema validation report
//! │   ├── convert       # to / from JSON and YAML
//! │   ├── crypto        # encrypt, decrypt, hash, base64
//! │   ├── report        # Report destinations
//! │   ├── prompt        # Passwords and PIN confirmation
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── domain/       # EnvRecord, RecordSet, Schema
//!     ├── arrange       # Sort and group by prefix
//!     ├── diff          # Duplicates, missing keys, synchronize
//!     ├── schema        # Schema generation and validation
//!     ├── crypto/       # Cipher trait, AES-256-CBC, hashing, base64
//!     ├── convert       # JSON / YAML conversion
//!     ├── discover      # Env file discovery
//!     ├── report        # Markdown reports
//!     ├── config        # .envdoc.toml
//!     └── files         # Writes and output naming
//! ```
//!
//! # Example
//!
//! ```
//! use envdoc::core::diff;
//! use envdoc::core::domain::RecordSet;
//!
//! let set = RecordSet::parse("DB_PORT=5432\nAPP=web\nDB_HOST=db\nAPP=api\n", ".env");
//! assert_eq!(diff::find_duplicates(set.records()), vec!["APP"]);
//!
//! let arranged = set.arranged();
//! assert_eq!(
//!     arranged.to_env_string(),
//!     "APP=web\nAPP=api\n\nDB_HOST=db\nDB_PORT=5432\n"
//! );
//! ```

pub mod cli;
pub mod core;
pub mod error;
