//! Stats access point for the dynamic queue

use crate::queue::coordinator::StatsRequest;
use crate::queue::error::{QueueError, QueueResult};
use crate::queue::types::QueueStats;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

/// Read-only capability for observing live queue usage
///
/// A `StatsReader` carries no mutation authority; it exists purely for
/// observability (dashboards, tests). Snapshots are produced by the
/// coordinator between input/output work, so a read reflects a consistent
/// instant of the queue's counters.
///
/// The reader is `Clone`: several observers may poll the same queue, and
/// their requests are served in arrival order.
#[derive(Clone)]
pub struct StatsReader {
    requests: mpsc::Sender<StatsRequest>,
}

impl StatsReader {
    pub(crate) fn new(requests: mpsc::Sender<StatsRequest>) -> Self {
        Self { requests }
    }

    /// Wait for the next snapshot.
    ///
    /// Fails with [`QueueError::Closed`] once the coordinator has exited;
    /// that failure is permanent.
    pub async fn read(&self) -> QueueResult<QueueStats> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.requests
            .send(reply_tx)
            .await
            .map_err(|_| QueueError::Closed)?;
        reply_rx.await.map_err(|_| QueueError::Closed)
    }

    /// Wait for the next snapshot, giving up after `timeout`.
    ///
    /// Fails with [`QueueError::Cancelled`] when the deadline fires before a
    /// snapshot is served — transient, retryable while the queue is alive.
    /// Once the coordinator has exited the result is deterministically
    /// [`QueueError::Closed`], even if the deadline fired in the same
    /// instant.
    pub async fn read_timeout(&self, timeout: Duration) -> QueueResult<QueueStats> {
        match tokio::time::timeout(timeout, self.read()).await {
            Ok(result) => result,
            Err(_elapsed) => {
                if self.requests.is_closed() {
                    Err(QueueError::Closed)
                } else {
                    Err(QueueError::Cancelled)
                }
            }
        }
    }
}
