// LogTally - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogTally";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "LogTally";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Parsing
// =============================================================================

/// Number of whitespace-delimited fields a line must yield to become a record:
/// date, time, level, message.
pub const RECORD_FIELD_COUNT: usize = 4;

/// Path argument that selects standard input as the line source.
pub const STDIN_PATH: &str = "-";

// =============================================================================
// Report layout
// =============================================================================

/// Header label of the level column.
pub const LEVEL_HEADER: &str = "Level";

/// Header label of the count column.
pub const COUNT_HEADER: &str = "Count";

/// Default minimum width of the level column.
pub const DEFAULT_LEVEL_WIDTH: usize = 16;

/// Smallest configurable level column width (must fit the header label).
pub const MIN_LEVEL_WIDTH: usize = LEVEL_HEADER.len();

/// Largest configurable level column width.
pub const MAX_LEVEL_WIDTH: usize = 64;

/// Default minimum width of the count column.
pub const DEFAULT_COUNT_WIDTH: usize = 9;

/// Smallest configurable count column width.
pub const MIN_COUNT_WIDTH: usize = 1;

/// Largest configurable count column width.
pub const MAX_COUNT_WIDTH: usize = 20;

// =============================================================================
// Logging
// =============================================================================

/// Default tracing filter when neither RUST_LOG, --debug, nor config apply.
/// Kept at warn so a normal run prints nothing but the report.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Tracing target prefix of this crate, used to scope verbose levels.
pub const CRATE_TARGET: &str = "logtally";

/// Level names accepted by `[logging] level` in config.toml.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Maximum characters of a skipped line echoed into trace output.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 200;

// =============================================================================
// File names
// =============================================================================

/// Name of the optional configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";
