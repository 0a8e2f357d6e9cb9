//! Test modules for the dynamic queue
//!
//! This module organizes the test suites for the queue system. Ring buffer
//! unit tests live beside the data structure in `ring.rs`; the suites here
//! exercise the coordinator and its access handles by functional area.

mod lifecycle;
