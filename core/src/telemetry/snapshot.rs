//! telemetry/snapshot.rs
//! Immutable summary of one writer run, serializable for logs and callers.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::WriterCounters;
use crate::telemetry::timers::{StageTimes, TelemetryTimer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub records: u64,
    pub blocks: u64,
    pub streams_completed: u64,
    pub bytes_flushed: u64,
    pub throughput_bytes_per_sec: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(counters: &WriterCounters, timer: &TelemetryTimer) -> Self {
        let elapsed = timer.elapsed();

        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_flushed as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            records: counters.records,
            blocks: counters.blocks,
            streams_completed: counters.streams_completed,
            bytes_flushed: counters.bytes_flushed,
            throughput_bytes_per_sec: throughput,
            elapsed,
            stage_times: timer.stage_times.clone(),
        }
    }

    pub fn throughput_mib_per_sec(&self) -> f64 {
        self.throughput_bytes_per_sec / (1024.0 * 1024.0)
    }

    /// Stage time can never exceed wall-clock time.
    pub fn sanity_check(&self) -> bool {
        self.stage_times.total() <= self.elapsed
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
