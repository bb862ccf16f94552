//! In-memory loopback transport for mysqlctl clients.
//!
//! Models daemon behaviour without a network. It backs unit and integration
//! tests and lets orchestration flows dry-run against simulated daemons.

mod client;
mod daemon;
mod transport;

pub use client::InMemoryClient;
pub use daemon::{AppliedBinlog, DaemonSnapshot, DaemonStatus, InMemoryDaemon, ReceivedCommand};
pub use transport::{IN_MEMORY_PROTOCOL, InMemoryTransport};
