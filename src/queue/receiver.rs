//! Read-side handle for the dynamic queue

use crate::queue::coordinator::ReadRequest;
use tokio::sync::{mpsc, oneshot};

/// Read-only handle yielding buffered values in FIFO order
///
/// Values arrive in send order, except for values silently evicted by the
/// bounded drop-oldest policy; among retained values order is always
/// preserved. `recv` returns `None` only once the sender has been closed
/// and every buffered value has been drained.
///
/// # Example
///
/// ```rust,no_run
/// # async fn example(mut rx: dynq::queue::QueueReceiver<u64>) {
/// while let Some(value) = rx.recv().await {
///     println!("got {value}");
/// }
/// // sender closed and buffer fully drained
/// # }
/// ```
pub struct QueueReceiver<T> {
    reads: mpsc::Sender<ReadRequest<T>>,
}

impl<T> QueueReceiver<T> {
    pub(crate) fn new(reads: mpsc::Sender<ReadRequest<T>>) -> Self {
        Self { reads }
    }

    /// Wait for the next value.
    ///
    /// Suspends while the buffer is empty and the input side is still open.
    /// Returns `None` once the queue is closed and drained.
    pub async fn recv(&mut self) -> Option<T> {
        let (reply_tx, reply_rx) = oneshot::channel();
        if self.reads.send(reply_tx).await.is_err() {
            // coordinator exited: closed and fully drained
            return None;
        }
        reply_rx.await.ok()
    }
}
