//! Queue Error Types

/// Errors surfaced by the stats access point
///
/// Bounded-overflow eviction is deliberately not represented here: dropping
/// the oldest value on a full bounded queue is normal sliding-window
/// behaviour, observable only through the `dropped` counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    /// The coordinator has exited; every subsequent operation fails the
    /// same way.
    #[error("queue is closed")]
    Closed,

    /// The caller's deadline fired before a snapshot became available.
    /// Transient; retryable while the queue is alive.
    #[error("stats read cancelled before a snapshot was available")]
    Cancelled,
}

/// Result type for queue operations
pub type QueueResult<T> = Result<T, QueueError>;
