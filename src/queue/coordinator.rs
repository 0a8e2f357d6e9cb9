//! Queue coordinator task
//!
//! A single Tokio task exclusively owns one [`RingBuffer`] and multiplexes
//! three access points over it: accept-input, offer-output and
//! publish-stats. Because only the coordinator ever touches the buffer, no
//! lock is needed anywhere in the queue.
//!
//! The loop runs while the buffer holds values or the input side is still
//! open. Input is a bounded handoff; output and stats are request/response
//! rendezvous: a value only leaves the buffer once a consumer is actually
//! waiting for it, and a snapshot is only produced for a waiting reader.

use crate::queue::receiver::QueueReceiver;
use crate::queue::ring::RingBuffer;
use crate::queue::sender::QueueSender;
use crate::queue::stats::StatsReader;
use crate::queue::types::QueueStats;
use tokio::sync::{mpsc, oneshot};

/// A consumer waiting for the next value
pub(crate) type ReadRequest<T> = oneshot::Sender<T>;

/// A stats reader waiting for a snapshot
pub(crate) type StatsRequest = oneshot::Sender<QueueStats>;

/// Create an unbounded dynamic queue.
///
/// Returns the three access handles sharing one coordinator: a sender, a
/// receiver and a stats reader. Backing storage is allocated lazily, sized
/// to `min_capacity` when the first value arrives, and shrinks back toward
/// `min_capacity` when occupancy drops far enough.
///
/// Must be called from within a Tokio runtime.
///
/// # Panics
///
/// Panics if `min_capacity` is zero.
///
/// # Example
///
/// ```rust,no_run
/// # async fn example() {
/// let (tx, mut rx, stats) = dynq::queue::dynamic::<String>(64);
///
/// tx.send("hello".to_string()).await.unwrap();
/// assert_eq!(rx.recv().await.as_deref(), Some("hello"));
///
/// let snapshot = stats.read().await.unwrap();
/// assert_eq!(snapshot.enqueued, 1);
///
/// tx.close();
/// assert!(rx.recv().await.is_none());
/// # }
/// ```
pub fn dynamic<T>(min_capacity: usize) -> (QueueSender<T>, QueueReceiver<T>, StatsReader)
where
    T: Default + Send + 'static,
{
    dynamic_with_max(min_capacity, 0)
}

/// Create a dynamic queue whose capacity never exceeds `max_capacity`
/// (0 = unbounded).
///
/// A bounded queue is a sliding window: once full at the ceiling, each new
/// value silently evicts the oldest buffered one. Evictions are not errors;
/// they are visible only through the `dropped` counter in [`QueueStats`].
///
/// Must be called from within a Tokio runtime.
///
/// # Panics
///
/// Panics if `min_capacity` is zero, or if `max_capacity` is non-zero and
/// smaller than `min_capacity`. Invalid capacities are a caller bug and are
/// never silently corrected.
pub fn dynamic_with_max<T>(
    min_capacity: usize,
    max_capacity: usize,
) -> (QueueSender<T>, QueueReceiver<T>, StatsReader)
where
    T: Default + Send + 'static,
{
    assert!(min_capacity >= 1, "queue min_capacity must be at least 1");
    assert!(
        max_capacity == 0 || max_capacity >= min_capacity,
        "queue max_capacity ({max_capacity}) must be 0 or >= min_capacity ({min_capacity})"
    );

    let (input_tx, input_rx) = mpsc::channel(1);
    let (read_tx, read_rx) = mpsc::channel(1);
    let (stats_tx, stats_rx) = mpsc::channel(1);

    let coordinator = Coordinator {
        buffer: RingBuffer::with_max(max_capacity),
        min_capacity,
        stats: QueueStats {
            max_cap: max_capacity,
            ..QueueStats::default()
        },
        input: input_rx,
        reads: read_rx,
        stats_requests: stats_rx,
        parked_read: None,
        input_closed: false,
        reads_closed: false,
        stats_closed: false,
    };
    tokio::spawn(coordinator.run());

    (
        QueueSender::new(input_tx),
        QueueReceiver::new(read_tx),
        StatsReader::new(stats_tx),
    )
}

/// Exclusive owner of one ring buffer plus the channel ends the access
/// handles talk to
struct Coordinator<T> {
    buffer: RingBuffer<T>,
    min_capacity: usize,
    stats: QueueStats,
    input: mpsc::Receiver<T>,
    reads: mpsc::Receiver<ReadRequest<T>>,
    stats_requests: mpsc::Receiver<StatsRequest>,
    /// A consumer waiting for the buffer to become non-empty
    parked_read: Option<ReadRequest<T>>,
    input_closed: bool,
    reads_closed: bool,
    stats_closed: bool,
}

impl<T: Default + Send> Coordinator<T> {
    async fn run(mut self) {
        log::trace!(
            "queue coordinator started (min_capacity={}, max_capacity={})",
            self.min_capacity,
            self.buffer.max_capacity()
        );

        loop {
            if self.input_closed && self.buffer.is_empty() {
                break;
            }
            if self.input_closed && self.reads_closed && self.stats_closed {
                // nobody left who could ever drain the remainder
                log::debug!(
                    "queue abandoned with {} undrained value(s); discarding",
                    self.buffer.len()
                );
                break;
            }

            // Input is polled first so that a completed send is always
            // visible to a stats read issued after it. A read request is
            // only awaited while none is parked; fulfilment itself is
            // guarded on occupancy below.
            tokio::select! {
                biased;

                value = self.input.recv(), if !self.input_closed => match value {
                    Some(value) => self.accept(value),
                    None => {
                        log::trace!("queue input closed; draining {} value(s)", self.buffer.len());
                        self.input_closed = true;
                    }
                },

                request = self.reads.recv(), if !self.reads_closed && self.parked_read.is_none() => match request {
                    Some(request) => self.parked_read = Some(request),
                    None => self.reads_closed = true,
                },

                request = self.stats_requests.recv(), if !self.stats_closed => match request {
                    Some(reply) => self.publish_stats(reply),
                    None => self.stats_closed = true,
                },
            }

            self.offer_output();
        }

        log::trace!("queue coordinator exited");
    }

    /// Accept one value from the input handoff
    fn accept(&mut self, value: T) {
        if self.buffer.capacity() == 0 {
            // first value ever: allocate the floor lazily
            self.buffer.grow(self.min_capacity);
            self.stats.allocs += 1;
        }

        let cap_before = self.buffer.capacity();
        let evicted = self.buffer.enqueue(value);
        self.stats.enqueued += 1;
        if evicted {
            self.stats.dropped += 1;
        }
        if self.buffer.capacity() != cap_before {
            self.stats.allocs += 1;
        }
        self.stats.len = self.buffer.len();
        self.stats.cap = self.buffer.capacity();
    }

    /// Hand the oldest value to a parked consumer, if both exist
    fn offer_output(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let Some(request) = self.parked_read.take() else {
            return;
        };

        match request.send(self.buffer.dequeue()) {
            Ok(()) => {
                self.stats.dequeued += 1;
                self.maybe_shrink();
                self.stats.len = self.buffer.len();
            }
            Err(value) => {
                // the reader gave up between parking and handoff; the value
                // goes back to the front so FIFO order is preserved
                self.buffer.restore_front(value);
            }
        }
    }

    /// Release over-allocated storage once occupancy has dropped well below
    /// the configured floor
    fn maybe_shrink(&mut self) {
        if self.buffer.capacity() > self.min_capacity && self.buffer.len() < self.min_capacity / 2 {
            let cap_before = self.buffer.capacity();
            self.buffer.shrink(self.min_capacity - self.buffer.len());
            if self.buffer.capacity() != cap_before {
                self.stats.allocs += 1;
                self.stats.cap = self.buffer.capacity();
            }
        }
    }

    /// Serve a snapshot to a waiting stats reader. The counter bump comes
    /// after the handoff: the snapshot reports reads prior to this one.
    fn publish_stats(&mut self, reply: StatsRequest) {
        if reply.send(self.stats).is_ok() {
            self.stats.stats_reads += 1;
        }
    }
}
