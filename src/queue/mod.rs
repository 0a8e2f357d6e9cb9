//! Dynamic Queue Component
//!
//! A dynamic-capacity, single-writer queueing primitive that decouples
//! producer and consumer rates without locks. Capacity is unbounded by
//! default or bounded with a drop-oldest sliding window, and live usage
//! statistics are exposed through a separate, cancellable channel.
//!
//! # Overview
//!
//! This module provides an in-process producer/consumer queue built around
//! three cooperating pieces:
//!
//! - **Lock-free by confinement**: one coordinator task exclusively owns the
//!   ring buffer, so no lock ever guards it
//! - **Dynamic capacity**: storage is allocated lazily, grows amortized and
//!   shrinks back toward the configured floor as occupancy drops
//! - **Sliding window**: a bounded queue silently evicts its oldest value to
//!   admit a new one, never rejecting the producer
//! - **FIFO delivery**: retained values always emerge in send order
//! - **Live statistics**: a read-only, cancellable stats channel serves
//!   consistent snapshots of the queue's counters
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐  send (bounded handoff)   ┌───────────────────────────┐
//! │  Producer  │ ─────────────────────────▶│     Coordinator task      │
//! └────────────┘                           │  ┌─────────────────────┐  │
//!                                          │  │    RingBuffer<T>    │  │
//! ┌────────────┐  read request / reply     │  │ ┌──┬──┬──┬──┬──┬──┐ │  │
//! │  Consumer  │ ◀────────────────────────▶│  │ │  │▓▓│▓▓│▓▓│  │  │ │  │
//! └────────────┘                           │  │ └──┴──┴──┴──┴──┴──┘ │  │
//!                                          │  │   ▲ back            │  │
//! ┌────────────┐  stats request / reply    │  └─────────────────────┘  │
//! │ StatsReader│ ◀────────────────────────▶│      (exclusive owner)    │
//! └────────────┘                           └───────────────────────────┘
//! ```
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use dynq::queue;
//!
//! # async fn example() {
//! // bounded queue: at most 128 values retained, oldest evicted first
//! let (tx, mut rx, stats) = queue::dynamic_with_max::<u64>(32, 128);
//!
//! for i in 0..1000 {
//!     tx.send(i).await.unwrap();
//! }
//! tx.close();
//!
//! while let Some(value) = rx.recv().await {
//!     println!("drained {value}");
//! }
//!
//! // the coordinator has exited; the stats channel reports it
//! assert!(stats.read().await.is_err());
//! # }
//! ```

mod coordinator;
mod error;
mod receiver;
mod ring;
mod sender;
mod stats;
mod types;

pub mod api;

pub use coordinator::{dynamic, dynamic_with_max};
pub use error::{QueueError, QueueResult};
pub use receiver::QueueReceiver;
pub use ring::RingBuffer;
pub use sender::QueueSender;
pub use stats::StatsReader;
pub use types::QueueStats;

#[cfg(test)]
mod tests;
