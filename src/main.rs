// LogTally - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration loading (config.toml)
// 3. Logging initialisation (debug mode support)
// 4. Line-source acquisition and user-facing error translation
// 5. Running the analysis and printing the report

use clap::Parser;
use logtally::app::analyze::{analyze, AnalyzeOptions};
use logtally::core::report::{Report, TableLayout};
use logtally::platform;
use logtally::platform::config::AppConfig;
use logtally::util;
use logtally::util::error::{user_message, LogTallyError, Result};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

/// LogTally - count log records per level and list the records of one level.
///
/// Each line of the log is read as `<date> <time> <level> <message>`; lines
/// with fewer fields are skipped.
#[derive(Parser, Debug)]
#[command(name = "logtally", version, about)]
struct Cli {
    /// Log file to analyse ("-" reads stdin).
    path: PathBuf,

    /// Level to list in detail (case-insensitive, e.g. "error").
    level: Option<String>,

    /// Config file to use instead of the platform default.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config is loaded before logging so its [logging] level can take effect;
    // warnings are replayed once the subscriber exists.
    let loaded = match cli.config {
        Some(ref path) => platform::config::load_explicit_config(path),
        None => Ok(platform::config::load_config(
            &platform::config::PlatformPaths::resolve().config_file,
        )),
    };

    let (config, warnings) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            util::logging::init(cli.debug, None);
            let err = LogTallyError::from(e);
            tracing::error!(error = %err, "Config loading failed");
            eprintln!("{}", user_message(&err));
            return ExitCode::FAILURE;
        }
    };

    util::logging::init(cli.debug, config.log_level.as_deref());
    for warning in &warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    tracing::info!(
        version = util::constants::APP_VERSION,
        path = %cli.path.display(),
        level = cli.level.as_deref().unwrap_or(""),
        "LogTally starting"
    );

    let report = match run(cli, &config) {
        Ok(report) => report,
        Err(err) => {
            tracing::error!(error = %err, "Log source unavailable");
            eprintln!("{}", user_message(&err));
            return ExitCode::FAILURE;
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write!(out, "{report}").and_then(|()| out.flush()) {
        tracing::error!(error = %e, "Failed to write report");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Acquire the line source and run the analysis pipeline over it.
fn run(cli: Cli, config: &AppConfig) -> Result<Report> {
    let lines = platform::fs::read_lines(&cli.path)?;

    let options = AnalyzeOptions {
        level: cli.level,
        layout: TableLayout {
            level_width: config.level_width,
            count_width: config.count_width,
        },
    };
    Ok(analyze(&lines, &options))
}
