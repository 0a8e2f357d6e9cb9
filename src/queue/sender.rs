//! Write-side handle for the dynamic queue

use crate::queue::error::{QueueError, QueueResult};
use tokio::sync::mpsc;

/// Write-only handle for pushing values into a dynamic queue
///
/// `send` suspends until the coordinator services the handoff, which is what
/// decouples producer and consumer rates: a fast producer parks here while
/// the coordinator is busy, never inside the buffer logic.
///
/// Closing the sender is the queue's only graceful-shutdown trigger. The
/// coordinator keeps running until every value accepted before the close has
/// been drained to the receiver. `close` consumes the handle, so closing
/// twice is a compile error rather than a runtime question.
pub struct QueueSender<T> {
    input: mpsc::Sender<T>,
}

impl<T> QueueSender<T> {
    pub(crate) fn new(input: mpsc::Sender<T>) -> Self {
        Self { input }
    }

    /// Push one value into the queue, waiting until the coordinator accepts
    /// it.
    ///
    /// There is no forced-unblock cancellation for sends; closing the sender
    /// is the only way to wind the queue down. This is a documented
    /// limitation of the primitive, not an oversight.
    pub async fn send(&self, value: T) -> QueueResult<()> {
        self.input.send(value).await.map_err(|_| QueueError::Closed)
    }

    /// Close the input side. Buffered values remain readable; the receiver
    /// reports exhaustion only after the last one has been drained.
    ///
    /// Dropping the sender without calling `close` has the same effect.
    pub fn close(self) {
        drop(self.input);
    }
}
