// LogTally - util/logging.rs
//
// Diagnostic logging for a pipe-friendly CLI. The report owns stdout, so
// every log line goes to stderr, and by default only warnings and errors
// appear there. Verbose levels are scoped to this crate so dependencies stay
// quiet under --debug.
//
// Activation:
//   - Environment variable: RUST_LOG=... (full EnvFilter syntax, used verbatim)
//   - CLI flag: --debug
//   - Config file: [logging] level = "debug"

use super::constants;
use tracing_subscriber::EnvFilter;

/// Choose the filter directive.
///
/// Priority: RUST_LOG > --debug > config level > default (warn).
/// `--debug` and the config level apply to this crate only; everything else
/// stays at the default level.
pub fn filter_directive(
    env_directive: Option<&str>,
    debug_flag: bool,
    config_level: Option<&str>,
) -> String {
    if let Some(env) = env_directive.filter(|d| !d.trim().is_empty()) {
        return env.to_string();
    }
    let own_level = if debug_flag { Some("debug") } else { config_level };
    match own_level {
        Some(level) => format!(
            "{},{}={level}",
            constants::DEFAULT_LOG_LEVEL,
            constants::CRATE_TARGET
        ),
        None => constants::DEFAULT_LOG_LEVEL.to_string(),
    }
}

/// Initialise the logging subsystem on stderr.
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let env = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(env.as_deref(), debug_flag, config_level);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&directive))
        .with_writer(std::io::stderr)
        .with_target(debug_flag)
        .without_time()
        .compact()
        .init();

    tracing::debug!(
        app = constants::APP_NAME,
        version = constants::APP_VERSION,
        filter = %directive,
        "Logging initialised"
    );
}
