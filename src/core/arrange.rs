//! Arrange-by-prefix.
//!
//! Sorts records by key and separates prefix groups with one blank line.

use crate::core::domain::EnvRecord;

/// Sort records by key and mark group boundaries.
///
/// The sort is stable and byte-ordinal, so duplicate keys keep their
/// relative order. Every `blank_after` flag is recomputed: set when the next
/// record has a different prefix, cleared otherwise (including the last).
pub fn arrange(mut records: Vec<EnvRecord>) -> Vec<EnvRecord> {
    records.sort_by(|a, b| a.key.cmp(&b.key));

    let boundaries: Vec<bool> = records
        .windows(2)
        .map(|pair| pair[0].prefix() != pair[1].prefix())
        .collect();

    for (record, boundary) in records
        .iter_mut()
        .zip(boundaries.into_iter().chain(std::iter::once(false)))
    {
        record.blank_after = boundary;
    }

    records
}
