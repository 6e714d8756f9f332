//! Buffered upload writers on top of `RecordWriter`.
//!
//! - `BlockWriter`: independent blocks, each closed by its own footer
//! - `ChunkedWriter`: one stream split into chunks, one footer at the end
//!
//! Both flush once the buffered byte count reaches the configured
//! `block_size` and hand bytes to a `BlockSink`.

pub mod sink;
pub mod writer;
pub mod chunked;

pub use sink::{BlockSink, IoSink, MemorySink};
pub use writer::BlockWriter;
pub use chunked::ChunkedWriter;
