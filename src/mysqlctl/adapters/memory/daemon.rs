//! Simulated mysqlctl daemon state.

use crate::mysqlctl::{
    domain::{ClientId, DaemonCommand, DaemonCommandKind},
    ports::{ClientError, ClientResult},
};
use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

/// Whether the simulated `mysqld` is running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DaemonStatus {
    /// `mysqld` is not running.
    #[default]
    Stopped,
    /// `mysqld` is running.
    Running,
}

impl DaemonStatus {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Running => "running",
        }
    }
}

impl fmt::Display for DaemonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A binlog file applied by the daemon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedBinlog {
    /// Binlog file name as received.
    pub file_name: String,
    /// Restore position as received.
    pub restore_position: String,
}

/// A command as it reached the daemon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceivedCommand {
    /// Client that sent the command.
    pub client_id: ClientId,
    /// The command and its arguments.
    pub command: DaemonCommand,
    /// When the daemon received it.
    pub received_at: DateTime<Utc>,
}

/// Point-in-time copy of daemon state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaemonSnapshot {
    /// Current `mysqld` status.
    pub status: DaemonStatus,
    /// Arguments passed to the most recent successful start.
    pub mysqld_args: Vec<String>,
    /// Binlogs applied, in order.
    pub applied_binlogs: Vec<AppliedBinlog>,
    /// Completed upgrade runs.
    pub upgrade_count: u64,
    /// Number of configuration regenerations.
    pub config_generation: u64,
    /// Number of configuration reloads.
    pub refresh_count: u64,
    /// Clients currently connected.
    pub open_connections: usize,
    /// Every command received, including failed ones, in arrival order.
    pub received: Vec<ReceivedCommand>,
}

#[derive(Debug, Default)]
struct DaemonState {
    status: DaemonStatus,
    mysqld_args: Vec<String>,
    applied_binlogs: Vec<AppliedBinlog>,
    upgrade_count: u64,
    config_generation: u64,
    refresh_count: u64,
    open_connections: usize,
    received: Vec<ReceivedCommand>,
    failures: HashMap<DaemonCommandKind, String>,
    shutdown_delay: Duration,
}

impl DaemonState {
    fn require_running(&self, kind: DaemonCommandKind) -> ClientResult<()> {
        if self.status == DaemonStatus::Running {
            Ok(())
        } else {
            Err(ClientError::remote(kind, "mysqld is not running"))
        }
    }

    fn apply(&mut self, command: DaemonCommand) -> ClientResult<()> {
        let kind = command.kind();
        if let Some(message) = self.failures.get(&kind) {
            return Err(ClientError::remote(kind, message.clone()));
        }

        match command {
            DaemonCommand::Start { mysqld_args } => {
                if self.status == DaemonStatus::Running {
                    return Err(ClientError::remote(kind, "mysqld is already running"));
                }
                self.status = DaemonStatus::Running;
                self.mysqld_args = mysqld_args;
            }
            DaemonCommand::Shutdown { .. } => self.status = DaemonStatus::Stopped,
            DaemonCommand::RunMysqlUpgrade => {
                self.require_running(kind)?;
                self.upgrade_count = self.upgrade_count.saturating_add(1);
            }
            DaemonCommand::ApplyBinlogFile {
                binlog_file_name,
                binlog_restore_position,
            } => {
                self.require_running(kind)?;
                self.applied_binlogs.push(AppliedBinlog {
                    file_name: binlog_file_name,
                    restore_position: binlog_restore_position,
                });
            }
            DaemonCommand::ReinitConfig => {
                self.config_generation = self.config_generation.saturating_add(1);
            }
            DaemonCommand::RefreshConfig => {
                self.refresh_count = self.refresh_count.saturating_add(1);
            }
        }
        Ok(())
    }
}

/// Shared handle to a simulated mysqlctl daemon.
///
/// Clones share state, so a test can keep a handle while the transport
/// serves the same daemon to clients.
///
/// Daemon rules: `start` fails while running, `run_mysql_upgrade` and
/// `apply_binlog_file` require a running `mysqld`, and `shutdown` succeeds
/// in any state.
#[derive(Clone)]
pub struct InMemoryDaemon {
    state: Arc<RwLock<DaemonState>>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl InMemoryDaemon {
    /// Creates a stopped daemon using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Creates a stopped daemon stamping received commands with `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            state: Arc::new(RwLock::new(DaemonState::default())),
            clock,
        }
    }

    /// Makes every subsequent `kind` command fail with `message`.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the state lock is poisoned.
    pub fn fail_command(
        &self,
        kind: DaemonCommandKind,
        message: impl Into<String>,
    ) -> ClientResult<()> {
        self.write()?.failures.insert(kind, message.into());
        Ok(())
    }

    /// Removes an injected failure for `kind`.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the state lock is poisoned.
    pub fn clear_failure(&self, kind: DaemonCommandKind) -> ClientResult<()> {
        self.write()?.failures.remove(&kind);
        Ok(())
    }

    /// Sets how long a waiting shutdown takes to be confirmed.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the state lock is poisoned.
    pub fn set_shutdown_delay(&self, delay: Duration) -> ClientResult<()> {
        self.write()?.shutdown_delay = delay;
        Ok(())
    }

    /// Returns a copy of the current daemon state.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the state lock is poisoned.
    pub fn snapshot(&self) -> ClientResult<DaemonSnapshot> {
        let state = self.read()?;
        Ok(DaemonSnapshot {
            status: state.status,
            mysqld_args: state.mysqld_args.clone(),
            applied_binlogs: state.applied_binlogs.clone(),
            upgrade_count: state.upgrade_count,
            config_generation: state.config_generation,
            refresh_count: state.refresh_count,
            open_connections: state.open_connections,
            received: state.received.clone(),
        })
    }

    /// Records and executes `command` on behalf of `client_id`.
    pub(super) fn execute(&self, client_id: ClientId, command: DaemonCommand) -> ClientResult<()> {
        let received_at = self.clock.utc();
        let mut state = self.write()?;
        state.received.push(ReceivedCommand {
            client_id,
            command: command.clone(),
            received_at,
        });
        state.apply(command)
    }

    pub(super) fn shutdown_delay(&self) -> ClientResult<Duration> {
        Ok(self.read()?.shutdown_delay)
    }

    pub(super) fn open_connection(&self) -> ClientResult<()> {
        let mut state = self.write()?;
        state.open_connections = state.open_connections.saturating_add(1);
        Ok(())
    }

    pub(super) fn close_connection(&self) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.open_connections = state.open_connections.saturating_sub(1);
    }

    fn read(&self) -> ClientResult<RwLockReadGuard<'_, DaemonState>> {
        self.state
            .read()
            .map_err(|err| ClientError::transport(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> ClientResult<RwLockWriteGuard<'_, DaemonState>> {
        self.state
            .write()
            .map_err(|err| ClientError::transport(std::io::Error::other(err.to_string())))
    }
}

impl Default for InMemoryDaemon {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InMemoryDaemon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryDaemon")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
