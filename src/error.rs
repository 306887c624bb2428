//! Error types used across the crate.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors produced while executing a prompt command.
///
/// The `Display` text of each variant is the reply printed at the prompt,
/// so handlers can surface any of these directly.
#[derive(Debug, Error)]
pub enum CommandError {
    /// A field value failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The named contact does not exist in the book.
    #[error("Contact not found.")]
    ContactNotFound,

    /// The phone number to replace is not on the record.
    #[error("Old phone number not found.")]
    PhoneNotFound(String),

    /// The command was called with the wrong number of arguments.
    #[error("{0}")]
    Usage(&'static str),

    /// The input line was blank.
    #[error("Enter user name.")]
    MissingName,
}

/// Errors produced while loading or saving the address book snapshot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the snapshot file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot contents could not be serialized or parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors produced while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held an unusable value.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Result alias for command execution.
pub type CommandResult<T> = Result<T, CommandError>;

/// Result alias for snapshot storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Result alias for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
