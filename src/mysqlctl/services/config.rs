//! Client configuration selecting the active mysqlctl protocol.

use crate::mysqlctl::domain::{ProtocolDomainError, ProtocolName};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;
use tracing::debug;

/// Environment variable overriding the configured protocol.
pub const CLIENT_PROTOCOL_ENV: &str = "MYSQLCTL_CLIENT_PROTOCOL";

/// Errors returned while loading client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read mysqlctl client config {path}: {source}")]
    Read {
        /// Path relative to the configuration directory.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The configuration document is not valid.
    #[error("invalid mysqlctl client config: {0}")]
    Parse(#[from] serde_json::Error),

    /// An override named an invalid protocol.
    #[error("invalid MYSQLCTL_CLIENT_PROTOCOL override: {0}")]
    Protocol(#[from] ProtocolDomainError),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings consumed by [`super::ClientSelector`].
///
/// The protocol is fixed once the selector is built. Documents use the key
/// `protocol`; `mysqlctl_client_protocol` is accepted as an alias.
///
/// # Examples
///
/// ```
/// use mysqlctl_client::mysqlctl::services::ClientConfig;
///
/// let config = ClientConfig::from_json_str(r#"{"protocol": "grpc"}"#)?;
/// assert_eq!(config.protocol().as_str(), "grpc");
/// # Ok::<(), mysqlctl_client::mysqlctl::services::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    #[serde(alias = "mysqlctl_client_protocol")]
    protocol: ProtocolName,
}

impl ClientConfig {
    /// Creates a configuration selecting `protocol`.
    #[must_use]
    pub const fn new(protocol: ProtocolName) -> Self {
        Self { protocol }
    }

    /// Returns the selected protocol.
    #[must_use]
    pub const fn protocol(&self) -> &ProtocolName {
        &self.protocol
    }

    /// Parses a JSON configuration document.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is malformed, has
    /// unknown keys, or names an invalid protocol.
    pub fn from_json_str(document: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(document)?)
    }

    /// Reads a JSON configuration file from `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read or
    /// [`ConfigError::Parse`] when its content is invalid.
    pub fn load(dir: &Dir, path: &Utf8Path) -> ConfigResult<Self> {
        let document = dir.read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        let config = Self::from_json_str(&document)?;
        debug!(%path, protocol = %config.protocol, "loaded mysqlctl client config");
        Ok(config)
    }

    /// Applies [`CLIENT_PROTOCOL_ENV`] when `lookup` yields a value for it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Protocol`] when the override is not a valid
    /// protocol name.
    pub fn with_env_override(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> ConfigResult<Self> {
        if let Some(value) = lookup(CLIENT_PROTOCOL_ENV) {
            self.protocol = ProtocolName::new(value)?;
            debug!(protocol = %self.protocol, "protocol overridden from environment");
        }
        Ok(self)
    }

    /// Builds the default configuration with the process environment
    /// override applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Protocol`] when [`CLIENT_PROTOCOL_ENV`] holds an
    /// invalid protocol name.
    pub fn from_env() -> ConfigResult<Self> {
        Self::default().with_env_override(|key| std::env::var(key).ok())
    }
}
