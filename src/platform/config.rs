// LogTally - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for LogTally configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Default location of config.toml inside the platform config directory
    /// (e.g. ~/.config/logtally/config.toml or %APPDATA%\LogTally\config\config.toml).
    pub config_file: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        let config_dir = match ProjectDirs::from("", "", constants::APP_ID) {
            Some(proj_dirs) => proj_dirs.config_dir().to_path_buf(),
            None => {
                tracing::warn!("Could not determine platform directories, using current directory");
                PathBuf::from(".")
            }
        };
        let config_file = config_dir.join(constants::CONFIG_FILE_NAME);

        tracing::debug!(
            config = %config_dir.display(),
            file = %config_file.display(),
            "Platform paths resolved"
        );

        Self { config_file }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[report]` section.
    pub report: ReportSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[report]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ReportSection {
    /// Minimum width of the level column.
    pub level_width: Option<usize>,
    /// Minimum width of the count column.
    pub count_width: Option<usize>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    // -- Report --
    /// Minimum width of the level column.
    pub level_width: usize,
    /// Minimum width of the count column.
    pub count_width: usize,

    // -- Logging --
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            level_width: constants::DEFAULT_LEVEL_WIDTH,
            count_width: constants::DEFAULT_COUNT_WIDTH,
            log_level: None,
        }
    }
}

/// Read and deserialise a config file without validating values.
pub fn read_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load an explicitly requested config file (`--config`).
///
/// Unlike the platform default, a missing or unparseable explicit file is an
/// error: the user asked for it by name. Out-of-range values still only warn.
pub fn load_explicit_config(path: &Path) -> Result<(AppConfig, Vec<String>), ConfigError> {
    let raw = read_config_file(path)?;
    tracing::info!(path = %path.display(), "Loaded config file");
    Ok(validate(raw))
}

/// Load and validate `config.toml` from its platform default location.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first-run).
/// If the file is unreadable or unparseable, returns defaults with a warning.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), Vec::new());
    }

    match read_config_file(config_path) {
        Ok(raw) => {
            tracing::info!(path = %config_path.display(), "Loaded config.toml");
            validate(raw)
        }
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            (AppConfig::default(), vec![msg])
        }
    }
}

/// Validate each field against named constants, accumulating all warnings.
fn validate(raw: RawConfig) -> (AppConfig, Vec<String>) {
    let mut config = AppConfig::default();
    let mut warnings: Vec<String> = Vec::new();

    // -- Report: level_width --
    if let Some(width) = raw.report.level_width {
        if (constants::MIN_LEVEL_WIDTH..=constants::MAX_LEVEL_WIDTH).contains(&width) {
            config.level_width = width;
        } else {
            warnings.push(out_of_range(
                "report.level_width",
                width,
                constants::MIN_LEVEL_WIDTH,
                constants::MAX_LEVEL_WIDTH,
                constants::DEFAULT_LEVEL_WIDTH,
            ));
        }
    }

    // -- Report: count_width --
    if let Some(width) = raw.report.count_width {
        if (constants::MIN_COUNT_WIDTH..=constants::MAX_COUNT_WIDTH).contains(&width) {
            config.count_width = width;
        } else {
            warnings.push(out_of_range(
                "report.count_width",
                width,
                constants::MIN_COUNT_WIDTH,
                constants::MAX_COUNT_WIDTH,
                constants::DEFAULT_COUNT_WIDTH,
            ));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let lowered = level.to_lowercase();
        if constants::VALID_LOG_LEVELS.contains(&lowered.as_str()) {
            config.log_level = Some(lowered);
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: {}. Using default ({}).",
                constants::VALID_LOG_LEVELS.join(", "),
                constants::DEFAULT_LOG_LEVEL,
            ));
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}

fn out_of_range(field: &str, value: usize, min: usize, max: usize, default: usize) -> String {
    let err = ConfigError::ValueOutOfRange {
        field: field.to_string(),
        value: value.to_string(),
        expected: format!("{min}-{max}"),
    };
    format!("{err}. Using default ({default}).")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(&dir.path().join("config.toml"));
        assert!(warnings.is_empty());
        assert_eq!(config.level_width, constants::DEFAULT_LEVEL_WIDTH);
        assert_eq!(config.count_width, constants::DEFAULT_COUNT_WIDTH);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_valid_values_applied() {
        let file = write_config(
            "[report]\nlevel_width = 20\ncount_width = 4\n\n[logging]\nlevel = \"DEBUG\"\n",
        );
        let (config, warnings) = load_config(file.path());
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.level_width, 20);
        assert_eq!(config.count_width, 4);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_out_of_range_values_warn_and_default() {
        let file = write_config("[report]\nlevel_width = 2\ncount_width = 500\n");
        let (config, warnings) = load_config(file.path());
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("report.level_width"));
        assert_eq!(config.level_width, constants::DEFAULT_LEVEL_WIDTH);
        assert_eq!(config.count_width, constants::DEFAULT_COUNT_WIDTH);
    }

    #[test]
    fn test_unknown_log_level_warns() {
        let file = write_config("[logging]\nlevel = \"loud\"\n");
        let (config, warnings) = load_config(file.path());
        assert_eq!(warnings.len(), 1);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_unparseable_file_warns_and_defaults() {
        let file = write_config("[report\nlevel_width = ");
        let (config, warnings) = load_config(file.path());
        assert_eq!(warnings.len(), 1);
        assert_eq!(config.level_width, constants::DEFAULT_LEVEL_WIDTH);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let file = write_config("[report]\ntheme = \"dark\"\n[extra]\nx = 1\n");
        let (_, warnings) = load_config(file.path());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_explicit_config(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_explicit_bad_toml_is_error() {
        let file = write_config("not = [valid");
        let result = load_explicit_config(file.path());
        assert!(matches!(result, Err(ConfigError::TomlParse { .. })));
    }
}
