//! Shared world state for protocol selection BDD scenarios.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mysqlctl_client::mysqlctl::{
    adapters::memory::{InMemoryClient, InMemoryDaemon},
    domain::ProtocolName,
    ports::{ClientFactory, ClientResult, MysqlctlClient},
    services::{ProtocolRegistryBuilder, RegistryError, SelectorError},
};
use rstest::fixture;

/// Factory recording every `(network, address)` it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingFactory {
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingFactory {
    /// Returns the recorded calls.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ClientFactory for RecordingFactory {
    async fn connect(
        &self,
        network: &str,
        address: &str,
    ) -> ClientResult<Box<dyn MysqlctlClient>> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((network.to_owned(), address.to_owned()));
        }
        let client = InMemoryClient::open(InMemoryDaemon::new(), address)?;
        Ok(Box::new(client))
    }
}

/// Scenario world for protocol selection behaviour tests.
#[derive(Default)]
pub struct ProtocolWorld {
    /// Registry under construction.
    pub builder: ProtocolRegistryBuilder,
    /// Factories registered so far, by protocol name.
    pub factories: HashMap<String, RecordingFactory>,
    /// Protocol configured for selection, if overridden.
    pub active_protocol: Option<ProtocolName>,
    /// Result of the last registration attempt.
    pub last_register_result: Option<Result<(), RegistryError>>,
    /// Whether the last selection returned a client.
    pub client_returned: bool,
    /// Error from the last selection, if it failed.
    pub selection_error: Option<SelectorError>,
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ProtocolWorld {
    ProtocolWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Parses a protocol name from a step argument.
pub fn parse_protocol(name: &str) -> Result<ProtocolName, eyre::Report> {
    ProtocolName::new(name).map_err(|err| eyre::eyre!("invalid protocol in scenario: {err}"))
}
