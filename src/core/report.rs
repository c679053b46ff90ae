// LogTally - core/report.rs
//
// Plain-text rendering of the counts table and the per-level detail view.
// Core layer: builds strings only; the caller decides where they go.

use crate::core::model::{LevelCounts, LogRecord};
use crate::util::constants;
use std::fmt;

/// Column widths for the counts table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    /// Minimum width of the level column. Longer level names are not cut.
    pub level_width: usize,
    /// Minimum width of the count column.
    pub count_width: usize,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            level_width: constants::DEFAULT_LEVEL_WIDTH,
            count_width: constants::DEFAULT_COUNT_WIDTH,
        }
    }
}

/// Render the counts table: header, dash separator, then one row per level
/// sorted ascending by name. Empty counts render header and separator only.
pub fn render_counts(counts: &LevelCounts, layout: &TableLayout) -> String {
    let lw = layout.level_width;
    let cw = layout.count_width;

    let mut out = String::new();
    out.push_str(&format!(
        "{:<lw$} | {}\n",
        constants::LEVEL_HEADER,
        constants::COUNT_HEADER
    ));
    out.push_str(&format!("{}|{}\n", "-".repeat(lw + 1), "-".repeat(cw + 1)));

    for (level, count) in counts.sorted() {
        out.push_str(&format!("{level:<lw$} | {count:<cw$}\n"));
    }
    out
}

/// Render the detail view for a requested level.
///
/// `level` is the already upper-cased level name. Records are listed in the
/// order given as `<date> <time> - <message>`; an empty slice renders the
/// "no logs found" line instead.
pub fn render_details(level: &str, matches: &[&LogRecord]) -> String {
    let mut out = format!("Details for log level '{level}':\n");
    if matches.is_empty() {
        out.push_str(&format!("No logs found for level '{level}'.\n"));
        return out;
    }
    for record in matches {
        out.push_str(&format!(
            "{} {} - {}\n",
            record.date, record.time, record.message
        ));
    }
    out
}

/// Fully rendered output of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Counts table text.
    pub counts: String,
    /// Detail view text, present only when a level was requested.
    pub details: Option<String>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.counts)?;
        if let Some(ref details) = self.details {
            writeln!(f)?;
            f.write_str(details)?;
        }
        Ok(())
    }
}
