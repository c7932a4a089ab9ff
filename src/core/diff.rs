//! Key set operations.
//!
//! Duplicate detection within one file and missing-key comparison across
//! several files.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::path::PathBuf;

use tracing::debug;

use crate::core::domain::{EnvRecord, RecordSet};

/// Record sets keyed by their file path, iterated in path order.
pub type FileSets = BTreeMap<PathBuf, RecordSet>;

/// Distinct keys that appear more than once, sorted.
pub fn find_duplicates(records: &[EnvRecord]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.key.as_str()).or_insert(0) += 1;
    }

    let mut duplicates: Vec<String> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(key, _)| key.to_string())
        .collect();

    duplicates.sort();
    duplicates
}

/// Distinct keys of `source` not present in `target`, sorted.
pub fn find_missing_keys(source: &[impl AsRef<str>], target: &[impl AsRef<str>]) -> Vec<String> {
    let target: HashSet<&str> = target.iter().map(|k| k.as_ref()).collect();

    let missing: BTreeSet<&str> = source
        .iter()
        .map(|k| k.as_ref())
        .filter(|k| !target.contains(k))
        .collect();

    missing.into_iter().map(str::to_string).collect()
}

/// Every key present in at least one set.
pub fn union_keys(sets: &FileSets) -> BTreeSet<String> {
    sets.values()
        .flat_map(|set| set.records().iter().map(|r| r.key.clone()))
        .collect()
}

/// For each file, the keys other files have and it lacks.
pub fn missing_by_file(sets: &FileSets) -> BTreeMap<PathBuf, Vec<String>> {
    let all: Vec<String> = union_keys(sets).into_iter().collect();

    sets.iter()
        .map(|(path, set)| (path.clone(), find_missing_keys(&all, &set.keys())))
        .collect()
}

/// Give every set the union of all keys, then arrange each one.
///
/// Added keys get an empty value and no comment.
pub fn synchronize(sets: FileSets) -> FileSets {
    let missing = missing_by_file(&sets);

    sets.into_iter()
        .map(|(path, mut set)| {
            let added = missing.get(&path).map(Vec::as_slice).unwrap_or_default();
            debug!(path = %path.display(), added = added.len(), "synchronizing");
            for key in added {
                set.push(EnvRecord::new(key.clone(), ""));
            }
            (path, set.arranged())
        })
        .collect()
}
