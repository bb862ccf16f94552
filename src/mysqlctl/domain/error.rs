//! Error types for mysqlctl domain validation.

use thiserror::Error;

/// Errors returned while constructing mysqlctl domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProtocolDomainError {
    /// The protocol name is empty after trimming.
    #[error("mysqlctl client protocol name must not be empty")]
    EmptyProtocolName,

    /// The protocol name contains characters outside `[A-Za-z0-9_-]`.
    #[error(
        "mysqlctl client protocol name '{0}' contains invalid characters (only ASCII alphanumerics, '_' and '-' allowed)"
    )]
    InvalidProtocolName(String),

    /// The protocol name exceeds the 64-character limit.
    #[error("mysqlctl client protocol name exceeds 64 character limit: {0}")]
    ProtocolNameTooLong(String),
}
