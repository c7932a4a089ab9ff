//! Record type.
//!
//! One `KEY=value` entry of an env file.

/// A single parsed env entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvRecord {
    /// Left-hand side of the first `=`, trimmed. Never empty.
    pub key: String,
    /// Right-hand side, trimmed. May be empty.
    pub value: String,
    /// Comment line directly above the entry, verbatim with its `#`.
    pub comment: String,
    /// Emit a blank line after this entry when writing.
    pub blank_after: bool,
}

impl EnvRecord {
    /// Create a record without comment or separator.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            comment: String::new(),
            blank_after: false,
        }
    }

    /// Attach a comment line.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Grouping prefix of this record's key.
    pub fn prefix(&self) -> &str {
        prefix(&self.key)
    }

    /// Comment text without its leading marker.
    ///
    /// Drops the first two characters (normally `"# "`) when the comment is
    /// longer than that; shorter comments yield an empty string.
    pub fn description(&self) -> String {
        if self.comment.chars().count() > 2 {
            self.comment.chars().skip(2).collect()
        } else {
            String::new()
        }
    }
}

/// Substring before the first `_`, or the whole key.
pub fn prefix(key: &str) -> &str {
    match key.find('_') {
        Some(idx) => &key[..idx],
        None => key,
    }
}
