//! Error types for fightbook.
//!
//! This module defines all error types used throughout the fightbook
//! crate. Note that a lookup miss on the roster is not an error: the
//! roster operations report "not found" through `bool`/`Option`
//! returns, and callers surface a notice and continue.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for fightbook operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Snapshot Errors ===
    /// Failed to read a roster snapshot file.
    #[error("failed to read snapshot at {path}: {source}")]
    SnapshotRead {
        /// Path to the snapshot file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a roster snapshot file.
    #[error("failed to write snapshot at {path}: {source}")]
    SnapshotWrite {
        /// Path to the snapshot file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A snapshot file did not contain a valid roster.
    #[error("snapshot at {path} is not a valid roster: {source}")]
    SnapshotParse {
        /// Path to the snapshot file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// A snapshot file carried an unsupported schema version.
    #[error("snapshot at {path} has unsupported version {found} (expected {expected})")]
    SnapshotVersion {
        /// Path to the snapshot file.
        path: PathBuf,
        /// The version found in the file.
        found: u32,
        /// The version this build supports.
        expected: u32,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for fightbook operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Check if this error means a snapshot could not be decoded
    /// (as opposed to a filesystem failure).
    #[must_use]
    pub fn is_deserialization(&self) -> bool {
        matches!(
            self,
            Self::SnapshotParse { .. } | Self::SnapshotVersion { .. }
        )
    }

    /// Check if this error is a filesystem failure.
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Self::SnapshotRead { .. }
                | Self::SnapshotWrite { .. }
                | Self::Io(_)
                | Self::DirectoryCreate { .. }
        )
    }
}
