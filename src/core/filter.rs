// LogTally - core/filter.rs
//
// Level filter for the detail view.
// Core layer: pure logic, no I/O.
//
// The requested level is upper-cased, then compared case-sensitively against
// the verbatim record level. Records written with a mixed- or lower-case
// level (e.g. "Error") are therefore counted by the aggregator but can never
// be selected here, whatever casing is requested.

use crate::core::model::{LogRecord, RecordStore};

/// Normalise a requested level for matching and display.
pub fn normalize_level(requested: &str) -> String {
    requested.to_uppercase()
}

/// Select records whose level equals the upper-cased `requested` level,
/// preserving store order.
pub fn filter_by_level<'a>(store: &'a RecordStore, requested: &str) -> Vec<&'a LogRecord> {
    let target = normalize_level(requested);
    let matches: Vec<&LogRecord> = store.iter().filter(|r| r.level == target).collect();

    tracing::debug!(
        level = %target,
        matched = matches.len(),
        "Level filter applied"
    );

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::build_store;

    fn store() -> RecordStore {
        build_store([
            "2024-01-01 10:00:00 ERROR disk full",
            "2024-01-01 10:00:01 WARNING low memory",
            "2024-01-01 10:00:02 ERROR disk still full",
            "2024-01-01 10:00:03 Error mixed case",
            "2024-01-01 10:00:04 error lower case",
        ])
        .store
    }

    #[test]
    fn test_requested_level_is_uppercased() {
        let store = store();
        let matches = filter_by_level(&store, "error");
        let messages: Vec<_> = matches.iter().map(|r| r.message.as_str()).collect();
        assert_eq!(messages, vec!["disk full", "disk still full"]);
    }

    #[test]
    fn test_mixed_case_records_are_unreachable() {
        let store = store();
        for requested in ["Error", "ERROR", "error", "eRrOr"] {
            let matches = filter_by_level(&store, requested);
            assert!(matches.iter().all(|r| r.level == "ERROR"));
            assert_eq!(matches.len(), 2);
        }
    }

    #[test]
    fn test_unknown_level_yields_empty() {
        let store = store();
        assert!(filter_by_level(&store, "critical").is_empty());
    }

    #[test]
    fn test_empty_store_yields_empty() {
        assert!(filter_by_level(&RecordStore::default(), "info").is_empty());
    }

    #[test]
    fn test_filter_count_matches_exact_uppercase_level() {
        let store = store();
        let expected = store.iter().filter(|r| r.level == "WARNING").count();
        assert_eq!(filter_by_level(&store, "warning").len(), expected);
    }
}
