//! Public API for the dynamic queue
//!
//! This module provides the complete public surface of the queue system.
//! External modules should import from here rather than directly from
//! internal modules. See the module documentation for usage examples and
//! architecture details.

// Constructors
pub use crate::queue::coordinator::{dynamic, dynamic_with_max};

// Access handles
pub use crate::queue::receiver::QueueReceiver;
pub use crate::queue::sender::QueueSender;
pub use crate::queue::stats::StatsReader;

// Standalone single-threaded collection
pub use crate::queue::ring::RingBuffer;

// Error handling
pub use crate::queue::error::{QueueError, QueueResult};

// Statistics snapshots
pub use crate::queue::types::QueueStats;
