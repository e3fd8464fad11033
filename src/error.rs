use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdbError>;

/// Errors raised by the crate's own fallible seams.
///
/// Failures of the `adb` tool itself are not errors: they come back as an
/// [`ExecResult`](crate::types::ExecResult) with a nonzero status.
#[derive(Debug, Error)]
pub enum AdbError {
    #[error("Failed to execute '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file {path:?}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl From<String> for AdbError {
    fn from(s: String) -> Self {
        AdbError::Other(s)
    }
}

impl From<&str> for AdbError {
    fn from(s: &str) -> Self {
        AdbError::Other(s.to_string())
    }
}
