//! Port contracts for remote mysqlctl control.
//!
//! Ports define transport-agnostic interfaces: the command surface every
//! client exposes and the constructor each transport registers.

mod client;
mod factory;

pub use client::{ClientError, ClientResult, MysqlctlClient};
pub use factory::{ClientFactory, ClientFactoryFn};
