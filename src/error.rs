//! Error types for tdl
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (empty name, bad priority, malformed due date)
//! - 4: Operation failed (IO error, corrupt task file, lock timeout)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the tdl CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for tdl operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Operation failures (exit code 4)
    #[error("Task file {path} is corrupt: {source}")]
    CorruptState {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported task file version: {0}")]
    UnsupportedVersion(String),

    #[error("Lock acquisition failed: {0}")]
    LockFailed(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidInput(_) => exit_codes::USER_ERROR,

            Error::CorruptState { .. }
            | Error::UnsupportedVersion(_)
            | Error::LockFailed(_)
            | Error::Io(_)
            | Error::Json(_) => exit_codes::OPERATION_FAILED,
        }
    }
}

/// Result type alias for tdl operations
pub type Result<T> = std::result::Result<T, Error>;
