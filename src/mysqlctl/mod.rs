//! Remote control of a mysqlctl daemon over a pluggable wire protocol.
//!
//! Orchestration code asks a [`services::ClientSelector`] for a client bound
//! to a daemon address. The selector resolves the configured protocol name
//! against a [`services::ProtocolRegistry`] populated at start-up by each
//! transport, so callers never depend on a concrete transport type. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Registry, selection, and configuration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
