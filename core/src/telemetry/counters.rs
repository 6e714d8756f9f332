//! telemetry/counters.rs
//! Mutable counters collected while a block or chunked writer runs.
//!
//! Converted into an immutable `TelemetrySnapshot` on close.
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriterCounters {
    /// Records closed with `end_record`.
    pub records: u64,
    /// Blocks / chunks handed to the sink.
    pub blocks: u64,
    /// Stream footers written.
    pub streams_completed: u64,
    /// Bytes handed to the sink.
    pub bytes_flushed: u64,
}

impl WriterCounters {
    pub fn add_record(&mut self) {
        self.records += 1;
    }

    pub fn add_block(&mut self, len: usize) {
        self.blocks += 1;
        self.bytes_flushed += len as u64;
    }

    pub fn add_stream(&mut self) {
        self.streams_completed += 1;
    }

    pub fn merge(&mut self, other: &WriterCounters) {
        self.records += other.records;
        self.blocks += other.blocks;
        self.streams_completed += other.streams_completed;
        self.bytes_flushed += other.bytes_flushed;
    }
}

impl AddAssign for WriterCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
