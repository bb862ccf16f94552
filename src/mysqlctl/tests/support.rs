//! Test doubles shared by the unit tests.

use crate::mysqlctl::{
    domain::{CallContext, DaemonCommandKind},
    ports::{ClientError, ClientFactory, ClientResult, MysqlctlClient},
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Client whose every operation either succeeds or fails with a remote
/// error, without any transport.
#[derive(Debug, Clone, Default)]
pub struct StubClient {
    fail_with: Option<String>,
}

impl StubClient {
    pub const fn succeeding() -> Self {
        Self { fail_with: None }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_owned()),
        }
    }

    fn outcome(&self, command: DaemonCommandKind) -> ClientResult<()> {
        match &self.fail_with {
            Some(message) => Err(ClientError::remote(command, message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MysqlctlClient for StubClient {
    async fn start(&self, ctx: &CallContext, _mysqld_args: &[String]) -> ClientResult<()> {
        ctx.run(async { self.outcome(DaemonCommandKind::Start) }).await
    }

    async fn shutdown(&self, ctx: &CallContext, _wait_for_mysqld: bool) -> ClientResult<()> {
        ctx.run(async { self.outcome(DaemonCommandKind::Shutdown) }).await
    }

    async fn run_mysql_upgrade(&self, ctx: &CallContext) -> ClientResult<()> {
        ctx.run(async { self.outcome(DaemonCommandKind::RunMysqlUpgrade) })
            .await
    }

    async fn apply_binlog_file(
        &self,
        ctx: &CallContext,
        _binlog_file_name: &str,
        _binlog_restore_position: &str,
    ) -> ClientResult<()> {
        ctx.run(async { self.outcome(DaemonCommandKind::ApplyBinlogFile) })
            .await
    }

    async fn reinit_config(&self, ctx: &CallContext) -> ClientResult<()> {
        ctx.run(async { self.outcome(DaemonCommandKind::ReinitConfig) })
            .await
    }

    async fn refresh_config(&self, ctx: &CallContext) -> ClientResult<()> {
        ctx.run(async { self.outcome(DaemonCommandKind::RefreshConfig) })
            .await
    }

    fn close(self: Box<Self>) {}
}

/// Factory that records each `(network, address)` it is called with.
#[derive(Debug, Clone, Default)]
pub struct RecordingFactory {
    calls: Arc<Mutex<Vec<(String, String)>>>,
    connect_error: Option<String>,
}

impl RecordingFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refusing(reason: &str) -> Self {
        Self {
            calls: Arc::default(),
            connect_error: Some(reason.to_owned()),
        }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl ClientFactory for RecordingFactory {
    async fn connect(
        &self,
        network: &str,
        address: &str,
    ) -> ClientResult<Box<dyn MysqlctlClient>> {
        self.calls
            .lock()
            .expect("calls lock")
            .push((network.to_owned(), address.to_owned()));
        match &self.connect_error {
            Some(reason) => Err(ClientError::connect(network, address, reason.clone())),
            None => Ok(Box::new(StubClient::succeeding())),
        }
    }
}
