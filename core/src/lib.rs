//! pbframe-core
//!
//! Checksum-framed record stream writer over the protobuf wire encoding.
//! Pure Rust, no FFI.
//!
//! ```
//! use pbframe_core::RecordWriter;
//!
//! let mut w = RecordWriter::new();
//! w.write_sint64(1, 42);
//! w.write_bool(2, true);
//! w.end_record();
//! let footer = w.complete();
//! assert_eq!(footer.total_records, 1);
//! assert_eq!(w.byte_count(), w.byte_string().len());
//! ```

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod config;
pub mod types;
pub mod checksum;

// Encoding layers
pub mod wire;
pub mod writer;
pub mod record;

// Buffered writers + observability
pub mod block;
pub mod telemetry;

pub use config::WriterConfig;
pub use types::{Result, WriterError};
pub use writer::{RecordWriter, StreamFooter, WriterState};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::block::{BlockSink, BlockWriter, ChunkedWriter, IoSink, MemorySink};
    pub use crate::config::WriterConfig;
    pub use crate::constants::reserved_tags;
    pub use crate::record::{write_record, Value};
    pub use crate::types::WriterError;
    pub use crate::wire::WireType;
    pub use crate::writer::{RecordWriter, StreamFooter, WriterState};
}
