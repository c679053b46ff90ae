// LogTally - platform/fs.rs
//
// Line-source acquisition: turns a file path (or "-" for stdin) into the
// ordered line sequence the core pipeline consumes. All I/O failures are
// surfaced here as `SourceError`; the core never sees them.

use crate::util::constants;
use crate::util::error::SourceError;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Read every line of the source at `path` in order.
///
/// A path of `-` reads standard input. Invalid UTF-8 is replaced rather than
/// rejected, so one bad byte costs at most one record.
pub fn read_lines(path: &Path) -> Result<Vec<String>, SourceError> {
    if path.as_os_str() == constants::STDIN_PATH {
        tracing::debug!("Reading log lines from stdin");
        return read_lines_from(io::stdin().lock(), path);
    }

    let file = std::fs::File::open(path).map_err(|e| SourceError::from_io(path.to_path_buf(), e))?;
    tracing::debug!(path = %path.display(), "Opened log file");
    read_lines_from(file, path)
}

/// Read all lines from any reader, attributing failures to `path`.
pub fn read_lines_from<R: Read>(mut reader: R, path: &Path) -> Result<Vec<String>, SourceError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| SourceError::from_io(PathBuf::from(path), e))?;

    let text = String::from_utf8_lossy(&bytes);
    let lines: Vec<String> = text.lines().map(str::to_owned).collect();

    tracing::debug!(
        path = %path.display(),
        bytes = bytes.len(),
        lines = lines.len(),
        "Log source read"
    );
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_lines_in_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "first\nsecond\r\nthird").unwrap();
        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_lines(&dir.path().join("absent.log"));
        assert!(matches!(result, Err(SourceError::NotFound { .. })));
    }

    #[test]
    fn test_directory_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_lines(dir.path());
        assert!(matches!(result, Err(SourceError::Read { .. })));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let bytes: &[u8] = b"2024-01-01 10:00:00 INFO ok\n2024-01-01 10:00:01 INFO bad \xff byte\n";
        let lines = read_lines_from(bytes, Path::new("mem.log")).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains('\u{FFFD}'));
    }

    #[test]
    fn test_empty_source() {
        let lines = read_lines_from(io::empty(), Path::new("empty.log")).unwrap();
        assert!(lines.is_empty());
    }
}
