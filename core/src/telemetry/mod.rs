//! telemetry/mod.rs
//! Counters, timers and immutable snapshots for the block writers.
//!
//! The core `RecordWriter` keeps no telemetry of its own; the layers that
//! drive it count records, blocks and flushed bytes.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
