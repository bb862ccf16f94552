//! Client factory serving in-memory daemons by address.

use super::{InMemoryClient, InMemoryDaemon};
use crate::mysqlctl::ports::{ClientError, ClientFactory, ClientResult, MysqlctlClient};
use async_trait::async_trait;
use std::collections::HashMap;

/// Conventional protocol name for the in-memory transport.
pub const IN_MEMORY_PROTOCOL: &str = "memory";

const SUPPORTED_NETWORKS: [&str; 2] = ["tcp", "unix"];

/// [`ClientFactory`] connecting to [`InMemoryDaemon`]s keyed by address.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTransport {
    daemons: HashMap<String, InMemoryDaemon>,
}

impl InMemoryTransport {
    /// Creates a transport with no reachable daemons.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `daemon` reachable at `address`, replacing any previous one.
    #[must_use]
    pub fn with_daemon(mut self, address: impl Into<String>, daemon: InMemoryDaemon) -> Self {
        self.daemons.insert(address.into(), daemon);
        self
    }
}

#[async_trait]
impl ClientFactory for InMemoryTransport {
    async fn connect(
        &self,
        network: &str,
        address: &str,
    ) -> ClientResult<Box<dyn MysqlctlClient>> {
        if !SUPPORTED_NETWORKS.contains(&network) {
            return Err(ClientError::connect(network, address, "unsupported network"));
        }

        let daemon = self
            .daemons
            .get(address)
            .ok_or_else(|| ClientError::connect(network, address, "no daemon listening"))?;

        let client = InMemoryClient::open(daemon.clone(), address)?;
        Ok(Box::new(client))
    }
}
