//! Shared test helpers for in-memory transport integration tests.

use std::sync::Arc;

use mysqlctl_client::mysqlctl::{
    adapters::memory::{IN_MEMORY_PROTOCOL, InMemoryDaemon, InMemoryTransport},
    domain::ProtocolName,
    services::{ClientConfig, ClientSelector, ProtocolRegistry},
};
use rstest::fixture;

/// Address the primary test daemon listens on.
pub const PRIMARY_ADDRESS: &str = "db-primary:15999";

/// Address the replica test daemon listens on.
pub const REPLICA_ADDRESS: &str = "/vt/vtdataroot/vt_0000000101/mysqlctl.sock";

/// Two daemons and a selector wired to reach them.
pub struct Cluster {
    /// Daemon reachable at [`PRIMARY_ADDRESS`].
    pub primary: InMemoryDaemon,
    /// Daemon reachable at [`REPLICA_ADDRESS`].
    pub replica: InMemoryDaemon,
    /// Selector configured for the in-memory protocol.
    pub selector: ClientSelector,
}

/// Parses a protocol name known to be valid.
pub fn protocol(name: &str) -> ProtocolName {
    ProtocolName::new(name).expect("valid protocol name")
}

/// Provides a fresh cluster for each test.
#[fixture]
pub fn cluster() -> Cluster {
    let primary = InMemoryDaemon::new();
    let replica = InMemoryDaemon::new();
    let transport = InMemoryTransport::new()
        .with_daemon(PRIMARY_ADDRESS, primary.clone())
        .with_daemon(REPLICA_ADDRESS, replica.clone());
    let registry = ProtocolRegistry::builder()
        .with_factory(protocol(IN_MEMORY_PROTOCOL), transport)
        .build();
    let selector = ClientSelector::new(
        Arc::new(registry),
        ClientConfig::new(protocol(IN_MEMORY_PROTOCOL)),
    );
    Cluster {
        primary,
        replica,
        selector,
    }
}
