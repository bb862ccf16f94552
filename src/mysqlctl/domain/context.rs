//! Per-call execution context carrying cancellation and a deadline.

use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Reason a call stopped before its operation completed.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CallInterrupted {
    /// The caller cancelled the context.
    #[error("call cancelled")]
    Cancelled,
    /// The context deadline expired.
    #[error("call deadline exceeded")]
    DeadlineExceeded,
}

/// Cancellation and deadline scope for a single remote call.
///
/// Every remote operation takes a context as its first argument. Transports
/// wrap their network work in [`CallContext::run`] so that cancellation or
/// deadline expiry returns promptly and drops the in-flight future.
///
/// # Examples
///
/// ```
/// use mysqlctl_client::mysqlctl::domain::CallContext;
/// use std::time::Duration;
///
/// let ctx = CallContext::new().with_timeout(Duration::from_secs(30));
/// assert!(ctx.deadline().is_some());
/// assert!(!ctx.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    cancellation: CancellationToken,
    deadline: Option<Instant>,
}

impl CallContext {
    /// Creates a context with no deadline and a fresh cancellation token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the deadline to `timeout` from now.
    ///
    /// An earlier existing deadline is kept. A timeout too large to
    /// represent as an instant leaves the deadline unchanged.
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self,
        }
    }

    /// Sets an absolute deadline.
    ///
    /// An earlier existing deadline is kept.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(current) => current.min(deadline),
            None => deadline,
        });
        self
    }

    /// Replaces the cancellation token with one owned by the caller.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Returns a context that is cancelled with this one and shares its
    /// deadline, but whose own cancellation does not propagate upwards.
    #[must_use]
    pub fn child(&self) -> Self {
        Self {
            cancellation: self.cancellation.child_token(),
            deadline: self.deadline,
        }
    }

    /// Cancels this context and all of its children.
    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    /// Returns whether the context has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns the time left before the deadline, if any.
    ///
    /// An expired deadline yields [`Duration::ZERO`].
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// Runs `operation` until it completes, the context is cancelled, or the
    /// deadline passes, whichever comes first.
    ///
    /// Cancellation is checked before the deadline and the deadline before
    /// the operation, so an already cancelled or expired context never polls
    /// `operation`.
    ///
    /// # Errors
    ///
    /// Returns the operation's own error, or [`CallInterrupted`] converted
    /// into `E` when the call is cut short.
    pub async fn run<F, T, E>(&self, operation: F) -> Result<T, E>
    where
        F: Future<Output = Result<T, E>>,
        E: From<CallInterrupted>,
    {
        let deadline = self.deadline;
        let expiry = async move {
            match deadline {
                Some(instant) => tokio::time::sleep_until(instant).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            () = self.cancellation.cancelled() => Err(CallInterrupted::Cancelled.into()),
            () = expiry => Err(CallInterrupted::DeadlineExceeded.into()),
            result = operation => result,
        }
    }
}
