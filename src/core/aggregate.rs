// LogTally - core/aggregate.rs
//
// Per-level occurrence tally over a complete record store.

use crate::core::model::{LevelCounts, RecordStore};
use std::collections::HashMap;

/// Tally records by exact level string.
///
/// No case folding: `ERROR` and `error` are counted under separate keys.
/// The sum of all counts equals `store.len()`.
pub fn count_by_level(store: &RecordStore) -> LevelCounts {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for record in store {
        *counts.entry(record.level.clone()).or_insert(0) += 1;
    }

    tracing::debug!(
        levels = counts.len(),
        records = store.len(),
        "Level counts computed"
    );

    LevelCounts::from_map(counts)
}
