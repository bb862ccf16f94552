//! mysqlctl-client: protocol-selectable remote control of a mysqlctl daemon.
//!
//! Orchestration tooling uses this crate to start, stop, upgrade, and
//! reconfigure a database daemon on another host without knowing which wire
//! protocol carries the commands.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Protocol names, call contexts, and the command vocabulary
//! - **Ports**: The client command surface and the transport factory contract
//! - **Adapters**: Concrete transports (an in-memory loopback is provided)
//! - **Services**: The protocol registry, client selector, and configuration
//!
//! # Modules
//!
//! - [`mysqlctl`]: Client contract, protocol registry, and client selection
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use mysqlctl_client::mysqlctl::{
//!     adapters::memory::{IN_MEMORY_PROTOCOL, InMemoryDaemon, InMemoryTransport},
//!     domain::{CallContext, ProtocolName},
//!     services::{ClientConfig, ClientSelector, ProtocolRegistry},
//! };
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let protocol = ProtocolName::new(IN_MEMORY_PROTOCOL)?;
//! let transport = InMemoryTransport::new().with_daemon("127.0.0.1:15999", InMemoryDaemon::new());
//! let registry = ProtocolRegistry::builder()
//!     .with_factory(protocol.clone(), transport)
//!     .build();
//!
//! let selector = ClientSelector::new(Arc::new(registry), ClientConfig::new(protocol));
//! let client = selector.new_client("tcp", "127.0.0.1:15999").await?;
//! client.start(&CallContext::new(), &[]).await?;
//! client.close();
//! # Ok(())
//! # }
//! ```

pub mod mysqlctl;
