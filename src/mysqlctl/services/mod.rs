//! Registry, client selection, and configuration services.

mod config;
mod registry;
mod selector;

pub use config::{CLIENT_PROTOCOL_ENV, ClientConfig, ConfigError, ConfigResult};
pub use registry::{ProtocolRegistry, ProtocolRegistryBuilder, RegistryError};
pub use selector::{ClientSelector, SelectorError, SelectorResult};
