// LogTally - core/parser.rs
//
// Line parsing and record store construction.
// Core layer: consumes an already-available sequence of lines, never touches
// the filesystem directly.

use crate::core::model::{LogRecord, RecordStore};
use crate::util::constants;

/// Result of building a record store from a line sequence.
#[derive(Debug, Default)]
pub struct ParseResult {
    /// Successfully parsed records, in source order.
    pub store: RecordStore,
    /// Total lines consumed.
    pub lines_processed: u64,
    /// Lines dropped for having fewer than four fields.
    pub lines_skipped: u64,
}

/// Parse a single line into a record.
///
/// The line is split on runs of whitespace into date, time, level, and a
/// message that absorbs the rest of the line verbatim (then trimmed).
/// Returns `None` when fewer than four fields are present; callers skip such
/// lines silently. Field contents are not validated.
pub fn parse_line(line: &str) -> Option<LogRecord> {
    let mut rest = line.trim();
    let mut fields: [&str; constants::RECORD_FIELD_COUNT - 1] = [""; 3];

    for field in fields.iter_mut() {
        let end = rest.find(char::is_whitespace)?;
        *field = &rest[..end];
        rest = rest[end..].trim_start();
    }

    // `rest` was trimmed at the end up front and at the start on each split,
    // so an empty remainder means the message field is missing.
    if rest.is_empty() {
        return None;
    }

    let [date, time, level] = fields;
    Some(LogRecord {
        date: date.to_string(),
        time: time.to_string(),
        level: level.to_string(),
        message: rest.to_string(),
    })
}

/// Build a record store from lines in order, dropping unparseable lines.
///
/// An empty or entirely unparseable source yields an empty store.
pub fn build_store<I, S>(lines: I) -> ParseResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records = Vec::new();
    let mut lines_processed: u64 = 0;
    let mut lines_skipped: u64 = 0;

    for line in lines {
        lines_processed += 1;
        let line = line.as_ref();
        match parse_line(line) {
            Some(record) => records.push(record),
            None => {
                lines_skipped += 1;
                tracing::trace!(
                    line_number = lines_processed,
                    preview = %preview(line),
                    "Skipping line with fewer than four fields"
                );
            }
        }
    }

    tracing::debug!(
        records = records.len(),
        lines_processed,
        lines_skipped,
        "Record store built"
    );

    ParseResult {
        store: RecordStore::from_records(records),
        lines_processed,
        lines_skipped,
    }
}

/// Truncate a line for diagnostic output without splitting a character.
fn preview(line: &str) -> &str {
    match line.char_indices().nth(constants::DEBUG_MAX_LINE_PREVIEW) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}
