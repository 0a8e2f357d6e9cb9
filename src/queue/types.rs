//! Type definitions for the queue system
//!
//! This module contains the statistics snapshot published by the queue
//! coordinator to stats readers.

use serde::{Deserialize, Serialize};

/// Immutable usage snapshot of a dynamic queue
///
/// Every counter except `len` and `cap` is monotonically non-decreasing over
/// the life of a queue. At any instant the counters satisfy
/// `enqueued - dequeued - dropped == len`.
///
/// Snapshots are plain `Copy` data and serialise with serde, so they can be
/// exported to monitoring endpoints without conversion glue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueStats {
    /// Values currently buffered
    pub len: usize,
    /// Slots currently allocated
    pub cap: usize,
    /// Number of backing-storage (re)allocations, growth and shrink alike
    pub allocs: u64,
    /// Configured capacity ceiling (0 = unbounded)
    pub max_cap: usize,
    /// Values accepted from senders
    pub enqueued: u64,
    /// Values handed to the receiver
    pub dequeued: u64,
    /// Values silently evicted by the bounded drop-oldest policy
    pub dropped: u64,
    /// Snapshots served before this one
    pub stats_reads: u64,
}
