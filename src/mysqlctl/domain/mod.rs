//! Domain model for remote mysqlctl commands.
//!
//! Protocol names, per-call execution contexts, and the command vocabulary
//! understood by a mysqlctl daemon. Transport concerns stay outside this
//! boundary.

mod command;
mod context;
mod error;
mod ids;
mod protocol;

pub use command::{DaemonCommand, DaemonCommandKind};
pub use context::{CallContext, CallInterrupted};
pub use error::ProtocolDomainError;
pub use ids::ClientId;
pub use protocol::{DEFAULT_PROTOCOL, ProtocolName};
