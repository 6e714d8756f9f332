use std::io;

use thiserror::Error;

/// Unified error for the layers built on top of the record writer.
///
/// The core `RecordWriter` itself never fails: buffer growth failure aborts,
/// and misuse (reserved field numbers, call order) is not detected.
#[derive(Debug, Error)]
pub enum WriterError {
    /// Sink I/O failure while handing out a block.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration rejected by `WriterConfig::validate`.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Arrays and maps only carry string, bigint, double and boolean elements.
    #[error("not a primitive type in array: {kind}")]
    NonPrimitiveElement { kind: &'static str },

    /// Element counts are written as a 32-bit varint.
    #[error("array has {len} elements, more than fit a 32-bit count")]
    TooManyElements { len: usize },
}

pub type Result<T> = std::result::Result<T, WriterError>;
