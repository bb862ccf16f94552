//! Constructor port registered by each mysqlctl transport.

use super::{ClientResult, MysqlctlClient};
use async_trait::async_trait;

/// Builds clients for one wire protocol.
///
/// A transport registers a factory under its protocol name; the selector
/// invokes it with the caller's network and address untouched.
#[async_trait]
pub trait ClientFactory: Send + Sync {
    /// Connects to the daemon at `address` over `network`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::mysqlctl::ports::ClientError`] when the transport
    /// cannot resolve or reach the daemon.
    async fn connect(&self, network: &str, address: &str)
    -> ClientResult<Box<dyn MysqlctlClient>>;
}

/// Adapts a synchronous constructor function into a [`ClientFactory`].
///
/// # Examples
///
/// ```
/// use mysqlctl_client::mysqlctl::ports::{ClientError, ClientFactoryFn};
///
/// let factory = ClientFactoryFn::new(|network: &str, address: &str| {
///     Err(ClientError::connect(network, address, "transport disabled"))
/// });
/// # let _ = factory;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ClientFactoryFn<F>(F);

impl<F> ClientFactoryFn<F>
where
    F: Fn(&str, &str) -> ClientResult<Box<dyn MysqlctlClient>> + Send + Sync,
{
    /// Wraps `constructor`.
    #[must_use]
    pub const fn new(constructor: F) -> Self {
        Self(constructor)
    }
}

#[async_trait]
impl<F> ClientFactory for ClientFactoryFn<F>
where
    F: Fn(&str, &str) -> ClientResult<Box<dyn MysqlctlClient>> + Send + Sync,
{
    async fn connect(
        &self,
        network: &str,
        address: &str,
    ) -> ClientResult<Box<dyn MysqlctlClient>> {
        (self.0)(network, address)
    }
}
