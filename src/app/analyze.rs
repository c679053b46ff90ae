// LogTally - app/analyze.rs
//
// Runs one pass of the pipeline over an acquired line sequence:
// build the record store, tally levels, optionally filter, render.
// Each stage consumes the previous stage's output and never mutates it.

use crate::core::aggregate::count_by_level;
use crate::core::filter::{filter_by_level, normalize_level};
use crate::core::parser::build_store;
use crate::core::report::{render_counts, render_details, Report, TableLayout};

/// Inputs for one analysis run besides the lines themselves.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    /// Level requested for the detail view (any casing). `None` or an empty
    /// string renders the counts table only.
    pub level: Option<String>,
    /// Counts table column widths.
    pub layout: TableLayout,
}

/// Run the full pipeline and return the rendered report.
///
/// Counts always cover the complete input before anything is rendered.
/// Re-running on the same lines and options yields an identical report.
pub fn analyze<I, S>(lines: I, options: &AnalyzeOptions) -> Report
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parsed = build_store(lines);
    let store = parsed.store;

    let counts = count_by_level(&store);
    let counts_text = render_counts(&counts, &options.layout);

    // An empty level string is not a request, same as omitting it.
    let requested_level = options.level.as_deref().filter(|l| !l.is_empty());

    let details = requested_level.map(|requested| {
        let level = normalize_level(requested);
        let matches = filter_by_level(&store, requested);
        render_details(&level, &matches)
    });

    tracing::info!(
        lines = parsed.lines_processed,
        skipped = parsed.lines_skipped,
        records = store.len(),
        levels = counts.len(),
        detail_level = requested_level.unwrap_or(""),
        "Analysis complete"
    );

    Report {
        counts: counts_text,
        details,
    }
}
