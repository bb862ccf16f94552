//! Commands understood by a remote mysqlctl daemon.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A lifecycle command sent to the daemon, with its arguments.
///
/// Arguments are opaque to this crate and travel to the daemon unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "command")]
pub enum DaemonCommand {
    /// Start the managed `mysqld` with optional extra arguments.
    Start {
        /// Extra arguments appended to the `mysqld` command line.
        mysqld_args: Vec<String>,
    },
    /// Stop the managed `mysqld`.
    Shutdown {
        /// Whether the call waits until `mysqld` has fully stopped.
        wait_for_mysqld: bool,
    },
    /// Run the embedded upgrade procedure against the data directory.
    RunMysqlUpgrade,
    /// Apply a binlog file at the given restore position.
    ApplyBinlogFile {
        /// Binlog file name.
        binlog_file_name: String,
        /// Position to restore to.
        binlog_restore_position: String,
    },
    /// Regenerate the on-disk configuration.
    ReinitConfig,
    /// Reload the configuration without regenerating it.
    RefreshConfig,
}

impl DaemonCommand {
    /// Returns the argument-free kind of this command.
    #[must_use]
    pub const fn kind(&self) -> DaemonCommandKind {
        match self {
            Self::Start { .. } => DaemonCommandKind::Start,
            Self::Shutdown { .. } => DaemonCommandKind::Shutdown,
            Self::RunMysqlUpgrade => DaemonCommandKind::RunMysqlUpgrade,
            Self::ApplyBinlogFile { .. } => DaemonCommandKind::ApplyBinlogFile,
            Self::ReinitConfig => DaemonCommandKind::ReinitConfig,
            Self::RefreshConfig => DaemonCommandKind::RefreshConfig,
        }
    }
}

impl fmt::Display for DaemonCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind().as_str())
    }
}

/// The six remote operations, without arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DaemonCommandKind {
    /// See [`DaemonCommand::Start`].
    Start,
    /// See [`DaemonCommand::Shutdown`].
    Shutdown,
    /// See [`DaemonCommand::RunMysqlUpgrade`].
    RunMysqlUpgrade,
    /// See [`DaemonCommand::ApplyBinlogFile`].
    ApplyBinlogFile,
    /// See [`DaemonCommand::ReinitConfig`].
    ReinitConfig,
    /// See [`DaemonCommand::RefreshConfig`].
    RefreshConfig,
}

impl DaemonCommandKind {
    /// Every command kind, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Start,
        Self::Shutdown,
        Self::RunMysqlUpgrade,
        Self::ApplyBinlogFile,
        Self::ReinitConfig,
        Self::RefreshConfig,
    ];

    /// Returns the canonical command name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Shutdown => "shutdown",
            Self::RunMysqlUpgrade => "run_mysql_upgrade",
            Self::ApplyBinlogFile => "apply_binlog_file",
            Self::ReinitConfig => "reinit_config",
            Self::RefreshConfig => "refresh_config",
        }
    }
}

impl fmt::Display for DaemonCommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
