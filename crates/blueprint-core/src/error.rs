//! Error types for blueprint-core

use std::path::{Path, PathBuf};

/// Result type alias for Builder Blueprint operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around the text formatter.
///
/// The formatter itself is total; these variants cover the layers that
/// feed it (files, stdin, config) and serialize its output.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O error, optionally tied to the path being accessed
    #[error("I/O error{}: {source}", path_suffix(.path))]
    Io {
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
        /// Path being read or written, if known
        path: Option<PathBuf>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// Config file could not be parsed as TOML
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" at {}", p.display()),
        None => String::new(),
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source, path: None }
    }
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            source,
            path: Some(path.as_ref().to_path_buf()),
        }
    }

    /// Returns whether the user can fix this error by changing their input
    /// (a bad config value, a malformed config file, a missing input file).
    pub fn is_user_error(&self) -> bool {
        match self {
            Error::Config { .. } | Error::Toml(_) => true,
            Error::Io { source, .. } => matches!(
                source.kind(),
                std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied
            ),
            Error::Json(_) => false,
        }
    }
}
