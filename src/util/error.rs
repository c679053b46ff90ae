// LogTally - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// The core pipeline is infallible; every error here originates at the
// edges (line-source acquisition, configuration loading).

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all LogTally operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum LogTallyError {
    /// The log source could not be opened or read.
    Source(SourceError),

    /// Configuration loading or validation failed.
    Config(ConfigError),
}

impl fmt::Display for LogTallyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(e) => write!(f, "Source error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for LogTallyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Source(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Source errors
// ---------------------------------------------------------------------------

/// Errors acquiring the line sequence from a file or stdin.
#[derive(Debug)]
pub enum SourceError {
    /// The log file does not exist.
    NotFound { path: PathBuf },

    /// The log file exists but could not be opened or read.
    Read { path: PathBuf, source: io::Error },
}

impl SourceError {
    /// Classify an I/O failure on `path` into the closed source error set.
    pub fn from_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Read { path, source }
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "Log file '{}' does not exist", path.display())
            }
            Self::Read { path, source } => {
                write!(f, "Failed to read log file '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::NotFound { .. } => None,
        }
    }
}

impl From<SourceError> for LogTallyError {
    fn from(e: SourceError) -> Self {
        Self::Source(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for LogTallyError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// User-facing translation
// ---------------------------------------------------------------------------

/// Translate an error into the single line printed to the user.
///
/// This is the only place error kinds are mapped to user-facing wording;
/// the `Display` impls above are for diagnostic logs.
pub fn user_message(err: &LogTallyError) -> String {
    match err {
        LogTallyError::Source(SourceError::NotFound { path }) => {
            format!("Error: Log file not found at '{}'", path.display())
        }
        LogTallyError::Source(SourceError::Read { path, source }) => {
            format!("Error reading file '{}': {source}", path.display())
        }
        LogTallyError::Config(e) => format!("Error: {e}"),
    }
}

/// Convenience type alias for LogTally results.
pub type Result<T> = std::result::Result<T, LogTallyError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_from_io_classifies_not_found() {
        let err = SourceError::from_io(
            PathBuf::from("missing.log"),
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, SourceError::NotFound { .. }));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_from_io_keeps_other_causes() {
        let err = SourceError::from_io(
            PathBuf::from("locked.log"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, SourceError::Read { .. }));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_user_message_not_found() {
        let err = LogTallyError::from(SourceError::NotFound {
            path: PathBuf::from("app.log"),
        });
        assert_eq!(user_message(&err), "Error: Log file not found at 'app.log'");
    }

    #[test]
    fn test_user_message_read_error() {
        let err = LogTallyError::from(SourceError::Read {
            path: PathBuf::from("app.log"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        });
        assert_eq!(user_message(&err), "Error reading file 'app.log': denied");
    }

    #[test]
    fn test_error_chain_is_preserved() {
        let err = LogTallyError::from(SourceError::Read {
            path: PathBuf::from("app.log"),
            source: io::Error::new(io::ErrorKind::Other, "boom"),
        });
        let inner = err.source().unwrap();
        assert!(inner.source().is_some());
    }
}
