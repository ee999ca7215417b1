//! Error types for cupmove
//!
//! Move failures never stop a run, but they are still carried as structured
//! errors so the runner can log what went wrong.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the mover
#[derive(Error, Debug)]
pub enum MoverError {
    /// File system operation errors
    #[error("File system error: {operation} failed on {path}")]
    FileSystem {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Process execution errors
    #[error("Process error: {command} failed")]
    Process {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl MoverError {
    /// Create a new file system error
    pub fn file_system<P: Into<PathBuf>>(
        operation: impl Into<String>,
        path: P,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a new process error for a command that ran and exited unsuccessfully
    pub fn process(
        command: impl Into<String>,
        exit_code: Option<i32>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::Process {
            command: command.into(),
            exit_code,
            stderr: stderr.into(),
            source: None,
        }
    }

    /// Create a new process error for a command that could not be spawned
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Process {
            command: command.into(),
            exit_code: None,
            stderr: format!("Failed to execute command: {source}"),
            source: Some(source),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, MoverError>;
