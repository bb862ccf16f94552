//! Command port implemented by every mysqlctl transport.

use crate::mysqlctl::domain::{CallContext, CallInterrupted, DaemonCommandKind};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for remote mysqlctl operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Remote command surface of a mysqlctl daemon.
///
/// Implementations carry each call over their own wire protocol. Every
/// remote operation honours the supplied [`CallContext`]: cancellation or
/// deadline expiry returns promptly with [`ClientError::Interrupted`].
///
/// A client owns its connection exclusively. [`MysqlctlClient::close`]
/// consumes it, so no call can follow teardown.
#[async_trait]
pub trait MysqlctlClient: Send + Sync {
    /// Starts `mysqld` on the daemon host, appending `mysqld_args` to its
    /// command line.
    async fn start(&self, ctx: &CallContext, mysqld_args: &[String]) -> ClientResult<()>;

    /// Stops `mysqld`.
    ///
    /// When `wait_for_mysqld` is `true` the call only succeeds once the
    /// daemon reports that `mysqld` has fully stopped. The context deadline
    /// still bounds the wait.
    async fn shutdown(&self, ctx: &CallContext, wait_for_mysqld: bool) -> ClientResult<()>;

    /// Runs the embedded upgrade procedure against the data directory.
    async fn run_mysql_upgrade(&self, ctx: &CallContext) -> ClientResult<()>;

    /// Applies `binlog_file_name` at `binlog_restore_position`.
    ///
    /// Both values are passed to the daemon unmodified.
    async fn apply_binlog_file(
        &self,
        ctx: &CallContext,
        binlog_file_name: &str,
        binlog_restore_position: &str,
    ) -> ClientResult<()>;

    /// Regenerates the daemon's on-disk configuration.
    async fn reinit_config(&self, ctx: &CallContext) -> ClientResult<()>;

    /// Reloads the daemon's configuration without regenerating it.
    async fn refresh_config(&self, ctx: &CallContext) -> ClientResult<()>;

    /// Terminates the connection and releases local resources.
    fn close(self: Box<Self>);
}

/// Errors returned by mysqlctl client transports.
///
/// Delivery failures and daemon-reported failures share this type; callers
/// needing finer detail inspect the transport error source.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// The transport could not establish a connection.
    #[error("cannot connect to mysqlctl daemon at {network}:{address}: {reason}")]
    Connect {
        /// Network type, e.g. `tcp` or `unix`.
        network: String,
        /// Daemon address.
        address: String,
        /// Transport diagnostic.
        reason: String,
    },

    /// The call could not be delivered.
    #[error("mysqlctl transport error: {0}")]
    Transport(#[source] Arc<dyn std::error::Error + Send + Sync>),

    /// The daemon received the command and reported a failure.
    #[error("mysqlctl daemon failed {command}: {message}")]
    Remote {
        /// Command that failed.
        command: DaemonCommandKind,
        /// Daemon diagnostic.
        message: String,
    },

    /// The call context was cancelled or its deadline expired.
    #[error(transparent)]
    Interrupted(#[from] CallInterrupted),
}

impl ClientError {
    /// Builds a connection failure for `network` and `address`.
    pub fn connect(
        network: impl Into<String>,
        address: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Connect {
            network: network.into(),
            address: address.into(),
            reason: reason.into(),
        }
    }

    /// Wraps a transport-level error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Builds a daemon-reported failure for `command`.
    pub fn remote(command: DaemonCommandKind, message: impl Into<String>) -> Self {
        Self::Remote {
            command,
            message: message.into(),
        }
    }

    /// Returns whether the call was cut short by cancellation or deadline.
    #[must_use]
    pub const fn is_interrupted(&self) -> bool {
        matches!(self, Self::Interrupted(_))
    }
}
