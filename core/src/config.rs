//! config.rs
//! Writer sizing knobs.
//!
//! The core `RecordWriter` only consumes `initial_capacity`; `block_size`
//! drives the flush threshold of the block and chunked writers.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BLOCK_SIZE, DEFAULT_INITIAL_CAPACITY, MAX_BLOCK_SIZE};
use crate::types::WriterError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Buffer capacity allocated up front and after each `reset`.
    pub initial_capacity: usize,
    /// Flush once the buffered byte count reaches this value.
    pub block_size: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

impl WriterConfig {
    pub fn with_block_size(block_size: usize) -> Self {
        Self {
            block_size,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), WriterError> {
        if self.block_size == 0 {
            return Err(WriterError::InvalidConfig("block_size must be > 0".into()));
        }
        if self.block_size > MAX_BLOCK_SIZE {
            return Err(WriterError::InvalidConfig(format!(
                "block_size {} exceeds maximum {}",
                self.block_size, MAX_BLOCK_SIZE
            )));
        }
        Ok(())
    }

    /// Parse from JSON; missing fields take their defaults.
    pub fn from_json(s: &str) -> Result<Self, WriterError> {
        let cfg: WriterConfig = serde_json::from_str(s)
            .map_err(|e| WriterError::InvalidConfig(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
