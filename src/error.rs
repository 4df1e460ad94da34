//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise
//! error handling. Domain validation errors live in [`crate::domain`];
//! everything here covers lookups, persistence, configuration, and the
//! command layer.

use thiserror::Error;

/// Errors raised by address book lookups and mutations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// No record exists under the given name.
    #[error("Record not found: {0}")]
    NotFound(String),
}

/// Errors raised by the persistence layer.
///
/// Write failures and read/decode failures are distinct kinds so the
/// command layer can report them with different messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Encoding or writing the data file failed.
    #[error("Failed to write data file: {0}")]
    Serialization(String),

    /// Reading or decoding the data file failed, including records that no
    /// longer pass field validation.
    #[error("Failed to restore data file: {0}")]
    Restore(String),
}

/// Errors raised while interpreting a parsed command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A required positional field is absent from the request.
    #[error("You must enter '{0}'")]
    MissingField(&'static str),

    /// The input does not start with a known command.
    #[error("Unrecognized command")]
    UnknownCommand,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
