//! Error types for chronal-io.

use std::path::{Path, PathBuf};

/// Error type for all fallible operations in the chronal-io crate.
///
/// This enum covers file system failures and malformed pattern lines.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IoError {
    /// Returned when a required input file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an operating system error on a file.
    #[error("i/o error on {}: {reason}", path.display())]
    Io {
        /// Path of the file being read or written.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when a pattern file line cannot be parsed.
    #[error("{}:{line}: {reason}", path.display())]
    Parse {
        /// Path of the pattern file.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },
}

impl IoError {
    pub(crate) fn io(path: &Path, e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_not_found() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/tmp/missing.txt"),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/missing.txt");
    }

    #[test]
    fn display_io() {
        let err = IoError::Io {
            path: PathBuf::from("/tmp/out.txt"),
            reason: "permission denied".to_string(),
        };
        assert_eq!(err.to_string(), "i/o error on /tmp/out.txt: permission denied");
    }

    #[test]
    fn display_parse() {
        let err = IoError::Parse {
            path: PathBuf::from("patterns.txt"),
            line: 3,
            reason: "expected 26 fields, got 25".to_string(),
        };
        assert_eq!(err.to_string(), "patterns.txt:3: expected 26 fields, got 25");
    }

    #[test]
    fn not_found_maps_to_file_not_found() {
        let e = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = IoError::io(Path::new("a.txt"), e);
        assert!(matches!(err, IoError::FileNotFound { .. }));

        let e = std::io::Error::other("disk full");
        let err = IoError::io(Path::new("a.txt"), e);
        assert!(matches!(err, IoError::Io { .. }));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<IoError>();
    }
}
