//! Client selection for the configured mysqlctl protocol.

use super::{ClientConfig, ProtocolRegistry};
use crate::mysqlctl::{
    domain::ProtocolName,
    ports::{ClientError, MysqlctlClient},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors returned while selecting and constructing a client.
#[derive(Debug, Error)]
pub enum SelectorError {
    /// No factory is registered for the configured protocol.
    #[error("unknown mysqlctl client protocol: {0}")]
    UnknownProtocol(ProtocolName),

    /// The selected transport failed to construct a client.
    #[error(transparent)]
    Connect(#[from] ClientError),
}

/// Result type for client selection.
pub type SelectorResult<T> = Result<T, SelectorError>;

/// Produces clients for the protocol named in a [`ClientConfig`].
///
/// The selector owns no connections. Each call to
/// [`ClientSelector::new_client`] hands a fresh client to the caller, who is
/// responsible for closing it.
#[derive(Debug, Clone)]
pub struct ClientSelector {
    registry: Arc<ProtocolRegistry>,
    config: ClientConfig,
}

impl ClientSelector {
    /// Creates a selector over a frozen registry.
    #[must_use]
    pub const fn new(registry: Arc<ProtocolRegistry>, config: ClientConfig) -> Self {
        Self { registry, config }
    }

    /// Returns the protocol this selector constructs clients for.
    #[must_use]
    pub const fn protocol(&self) -> &ProtocolName {
        self.config.protocol()
    }

    /// Returns the registry backing this selector.
    #[must_use]
    pub fn registry(&self) -> &ProtocolRegistry {
        &self.registry
    }

    /// Connects a client to the daemon at `address` over `network`.
    ///
    /// The configured protocol's factory is invoked once with `network` and
    /// `address` unchanged. Its result is returned as-is; nothing is retried.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::UnknownProtocol`] when the configured protocol
    /// has no registered factory, or [`SelectorError::Connect`] carrying the
    /// factory's own error.
    pub async fn new_client(
        &self,
        network: &str,
        address: &str,
    ) -> SelectorResult<Box<dyn MysqlctlClient>> {
        let protocol = self.config.protocol();
        let Some(factory) = self.registry.get(protocol) else {
            warn!(protocol = %protocol, "no factory registered for mysqlctl client protocol");
            return Err(SelectorError::UnknownProtocol(protocol.clone()));
        };

        let client = factory.connect(network, address).await?;
        info!(protocol = %protocol, network, address, "connected mysqlctl client");
        Ok(client)
    }
}
