//! Unified error types for Markpad.

use std::path::PathBuf;

/// Errors surfaced by filesystem access and document operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Directory listing or path classification failures
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Document open failures
    #[error("could not open {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Document save failures
    #[error("could not save {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Startup configuration errors, fatal before the window is shown
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

/// Convenience Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = Error::read("/tmp/notes.md", source);
        assert_eq!(format!("{}", err), "could not open /tmp/notes.md: no such file");
    }

    #[test]
    fn test_config_error_display() {
        let err = Error::Config("could not resolve home directory".to_string());
        assert!(format!("{}", err).contains("home directory"));
    }
}
