//! Validated protocol name type.

use super::ProtocolDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a protocol name.
const MAX_NAME_LENGTH: usize = 64;

/// Name of the transport selected when nothing else is configured.
pub const DEFAULT_PROTOCOL: &str = "grpc";

/// Identifier selecting which registered transport carries mysqlctl
/// commands (e.g. `grpc`).
///
/// Names are case-sensitive and compared exactly.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProtocolName(String);

impl ProtocolName {
    /// Creates a validated protocol name.
    ///
    /// Surrounding whitespace is trimmed. Only ASCII alphanumerics, `_`, and
    /// `-` are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolDomainError::EmptyProtocolName`] when the value is
    /// empty after trimming, [`ProtocolDomainError::InvalidProtocolName`]
    /// when it contains other characters, or
    /// [`ProtocolDomainError::ProtocolNameTooLong`] when it exceeds 64
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ProtocolDomainError> {
        let raw = value.into();
        let normalized = raw.trim();

        if normalized.is_empty() {
            return Err(ProtocolDomainError::EmptyProtocolName);
        }

        let is_valid = normalized
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

        if !is_valid {
            return Err(ProtocolDomainError::InvalidProtocolName(raw));
        }

        // ASCII only past this point, so bytes and characters agree.
        if normalized.len() > MAX_NAME_LENGTH {
            return Err(ProtocolDomainError::ProtocolNameTooLong(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the protocol name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProtocolName {
    fn default() -> Self {
        Self(DEFAULT_PROTOCOL.to_owned())
    }
}

impl TryFrom<String> for ProtocolName {
    type Error = ProtocolDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ProtocolName {
    type Error = ProtocolDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProtocolName> for String {
    fn from(value: ProtocolName) -> Self {
        value.0
    }
}

impl AsRef<str> for ProtocolName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ProtocolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
