//! Client connected to an [`InMemoryDaemon`].

use super::InMemoryDaemon;
use crate::mysqlctl::{
    domain::{CallContext, ClientId, DaemonCommand},
    ports::{ClientError, ClientResult, MysqlctlClient},
};
use async_trait::async_trait;
use tracing::debug;

/// In-memory mysqlctl client.
///
/// Holds one connection slot on its daemon until dropped or closed.
#[derive(Debug)]
pub struct InMemoryClient {
    id: ClientId,
    address: String,
    daemon: InMemoryDaemon,
}

impl InMemoryClient {
    /// Opens a connection to `daemon`, which listens on `address`.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the daemon state lock is poisoned.
    pub fn open(daemon: InMemoryDaemon, address: impl Into<String>) -> ClientResult<Self> {
        daemon.open_connection()?;
        Ok(Self {
            id: ClientId::new(),
            address: address.into(),
            daemon,
        })
    }

    /// Returns the identifier the daemon records for this client.
    #[must_use]
    pub const fn id(&self) -> ClientId {
        self.id
    }

    /// Returns the daemon address this client is connected to.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    async fn send(&self, ctx: &CallContext, command: DaemonCommand) -> ClientResult<()> {
        debug!(client = %self.id, address = %self.address, %command, "sending mysqlctl command");
        ctx.run(async { self.daemon.execute(self.id, command) })
            .await
    }
}

#[async_trait]
impl MysqlctlClient for InMemoryClient {
    async fn start(&self, ctx: &CallContext, mysqld_args: &[String]) -> ClientResult<()> {
        let command = DaemonCommand::Start {
            mysqld_args: mysqld_args.to_vec(),
        };
        self.send(ctx, command).await
    }

    async fn shutdown(&self, ctx: &CallContext, wait_for_mysqld: bool) -> ClientResult<()> {
        let command = DaemonCommand::Shutdown { wait_for_mysqld };
        if !wait_for_mysqld {
            return self.send(ctx, command).await;
        }

        let delay = self.daemon.shutdown_delay()?;
        debug!(client = %self.id, address = %self.address, %command, "sending mysqlctl command");
        ctx.run(async {
            self.daemon.execute(self.id, command)?;
            tokio::time::sleep(delay).await;
            Ok::<(), ClientError>(())
        })
        .await
    }

    async fn run_mysql_upgrade(&self, ctx: &CallContext) -> ClientResult<()> {
        self.send(ctx, DaemonCommand::RunMysqlUpgrade).await
    }

    async fn apply_binlog_file(
        &self,
        ctx: &CallContext,
        binlog_file_name: &str,
        binlog_restore_position: &str,
    ) -> ClientResult<()> {
        let command = DaemonCommand::ApplyBinlogFile {
            binlog_file_name: binlog_file_name.to_owned(),
            binlog_restore_position: binlog_restore_position.to_owned(),
        };
        self.send(ctx, command).await
    }

    async fn reinit_config(&self, ctx: &CallContext) -> ClientResult<()> {
        self.send(ctx, DaemonCommand::ReinitConfig).await
    }

    async fn refresh_config(&self, ctx: &CallContext) -> ClientResult<()> {
        self.send(ctx, DaemonCommand::RefreshConfig).await
    }

    fn close(self: Box<Self>) {
        debug!(client = %self.id, address = %self.address, "closing mysqlctl client");
    }
}

impl Drop for InMemoryClient {
    fn drop(&mut self) {
        self.daemon.close_connection();
    }
}
