// LogTally - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies.
//
// These types are the shared vocabulary across all layers. Every value here
// is created fresh per pipeline run and discarded at the end of it.

use std::collections::HashMap;

// =============================================================================
// Log Record (output of line parsing)
// =============================================================================

/// One successfully parsed log line.
///
/// Fields are kept exactly as they appear in the source; in particular
/// `level` is not case-normalised, so `ERROR` and `Error` are distinct levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// First whitespace-delimited field.
    pub date: String,

    /// Second whitespace-delimited field.
    pub time: String,

    /// Third whitespace-delimited field, verbatim.
    pub level: String,

    /// Remainder of the line after the level, trimmed at both ends.
    /// Embedded whitespace is preserved.
    pub message: String,
}

// =============================================================================
// Record Store
// =============================================================================

/// Ordered, immutable sequence of records in source line order.
///
/// Built once by `core::parser::build_store` and never mutated afterwards;
/// derived views (counts, filtered subsets) borrow from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<LogRecord>,
}

impl RecordStore {
    /// Wrap an already-ordered list of records.
    pub fn from_records(records: Vec<LogRecord>) -> Self {
        Self { records }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<LogRecord> for RecordStore {
    fn from_iter<I: IntoIterator<Item = LogRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a LogRecord;
    type IntoIter = std::slice::Iter<'a, LogRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// =============================================================================
// Level Counts
// =============================================================================

/// Occurrence count per literal level string.
///
/// Keys are exact level strings as written in the source. Entry order carries
/// no meaning; use `sorted()` for display order. A `LevelCounts` is a snapshot
/// of one `RecordStore` and is rebuilt rather than updated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelCounts {
    counts: HashMap<String, usize>,
}

impl LevelCounts {
    pub(crate) fn from_map(counts: HashMap<String, usize>) -> Self {
        Self { counts }
    }

    /// Count for an exact (case-sensitive) level string; zero if absent.
    pub fn get(&self, level: &str) -> usize {
        self.counts.get(level).copied().unwrap_or(0)
    }

    /// Number of distinct levels.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts. Equals the size of the store the counts came from.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Entries sorted lexicographically ascending by level name.
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(level, count)| (level.as_str(), *count))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(level: &str) -> LogRecord {
        LogRecord {
            date: "2024-01-01".to_string(),
            time: "10:00:00".to_string(),
            level: level.to_string(),
            message: "msg".to_string(),
        }
    }

    #[test]
    fn test_store_preserves_order() {
        let store: RecordStore = ["B", "A", "C"].iter().map(|l| record(l)).collect();
        let levels: Vec<_> = store.iter().map(|r| r.level.as_str()).collect();
        assert_eq!(levels, vec!["B", "A", "C"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_counts_sorted_is_lexicographic() {
        let mut map = HashMap::new();
        map.insert("WARNING".to_string(), 2);
        map.insert("ERROR".to_string(), 1);
        map.insert("DEBUG".to_string(), 5);
        let counts = LevelCounts::from_map(map);
        assert_eq!(
            counts.sorted(),
            vec![("DEBUG", 5), ("ERROR", 1), ("WARNING", 2)]
        );
        assert_eq!(counts.total(), 8);
    }

    #[test]
    fn test_counts_get_is_case_sensitive() {
        let mut map = HashMap::new();
        map.insert("ERROR".to_string(), 3);
        let counts = LevelCounts::from_map(map);
        assert_eq!(counts.get("ERROR"), 3);
        assert_eq!(counts.get("error"), 0);
    }
}
