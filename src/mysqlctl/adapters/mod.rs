//! Adapter implementations for mysqlctl client ports.

pub mod memory;
