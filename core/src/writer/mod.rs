//! The record writer.
//!
//! Responsibilities:
//! - Typed field writes onto one growable buffer (`core`)
//! - Per-record and whole-stream CRC32C accumulation
//! - Record trailer, stream footer, reset (`framing`)
//!
//! Non-responsibilities:
//! - Decoding
//! - Field-number validation
//! - Compression and transport

pub mod types;
pub mod core;
pub mod framing;

pub use self::core::RecordWriter;
pub use types::{StreamFooter, WriterState};
