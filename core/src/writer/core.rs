//! writer/core.rs
//!
//! `RecordWriter` state and the typed field-write operations.
//!
//! Every write appends protobuf wire bytes to the owned buffer. What each
//! operation folds into the record checksum:
//!
//! | operation                    | folds into record checksum   |
//! | ---------------------------- | ---------------------------- |
//! | `write_tag`                  | nothing                      |
//! | `write_length_delimited_tag` | field number                 |
//! | `write_sint64`               | field number, i64 (8)        |
//! | `write_bool`                 | field number, bool (1)       |
//! | `write_double`               | field number, f64 (8)        |
//! | `write_uint32`               | nothing                      |
//! | `write_string`               | field number, payload bytes  |
//! | `write_varint32`             | nothing                      |
//! | `write_string_no_tag`        | payload bytes                |
//! | `write_sint64_no_tag`        | i64 (8)                      |
//! | `write_bool_no_tag`          | bool (1)                     |
//! | `write_double_no_tag`        | f64 (8)                      |
//! | `write_bool_no_tag_raw`      | nothing                      |

use bytes::{Bytes, BytesMut};

use crate::checksum::Checksum;
use crate::config::WriterConfig;
use crate::constants::DEFAULT_INITIAL_CAPACITY;
use crate::wire::encode;
use crate::wire::WireType;
use crate::writer::types::WriterState;

/// Single-stream protobuf-wire writer with per-record and whole-stream
/// CRC32C accumulators.
///
/// Not internally synchronized. Callers sharing one writer across threads
/// must serialize access themselves.
#[derive(Debug)]
pub struct RecordWriter {
    pub(crate) buf: BytesMut,
    pub(crate) initial_capacity: usize,
    pub(crate) record_crc: Checksum,
    pub(crate) stream_crc: Checksum,
    pub(crate) record_count: i64,
    pub(crate) state: WriterState,
}

impl Default for RecordWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordWriter {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_INITIAL_CAPACITY)
    }

    /// Writer whose buffer starts (and restarts after `reset`) at `capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
            initial_capacity: capacity,
            record_crc: Checksum::new(),
            stream_crc: Checksum::new(),
            record_count: 0,
            state: WriterState::Idle,
        }
    }

    pub fn from_config(config: &WriterConfig) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    // -----------------------------------------------------------------------
    // Readout
    // -----------------------------------------------------------------------

    /// Bytes written since construction or the last `reset` / `take_bytes`.
    #[inline]
    pub fn byte_count(&self) -> usize {
        self.buf.len()
    }

    /// Immutable copy of the buffer; unaffected by later writes.
    pub fn byte_string(&self) -> Bytes {
        Bytes::copy_from_slice(&self.buf)
    }

    /// Borrowed view of the buffer.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    #[inline]
    pub fn state(&self) -> WriterState {
        self.state
    }

    /// Checksum of the record currently being written.
    #[inline]
    pub fn record_checksum(&self) -> u32 {
        self.record_crc.value()
    }

    /// Checksum over the record checksums completed so far.
    #[inline]
    pub fn stream_checksum(&self) -> u32 {
        self.stream_crc.value()
    }

    /// Records completed since the last `complete` / `reset`.
    #[inline]
    pub fn record_count(&self) -> i64 {
        self.record_count
    }

    #[inline]
    fn touch(&mut self) {
        self.state = WriterState::Recording;
    }

    // -----------------------------------------------------------------------
    // Tagged writes
    // -----------------------------------------------------------------------

    /// Bare tag; no checksum effect.
    pub fn write_tag(&mut self, field_number: u32, wire_type: WireType) {
        self.touch();
        encode::encode_tag(&mut self.buf, field_number, wire_type);
    }

    /// Length-delimited tag. The caller writes the payload afterwards
    /// (e.g. `write_varint32` + no-tag writes for arrays).
    pub fn write_length_delimited_tag(&mut self, field_number: u32) {
        self.touch();
        encode::encode_tag(&mut self.buf, field_number, WireType::LengthDelimited);
        self.record_crc.update_field_number(field_number);
    }

    pub fn write_sint64(&mut self, field_number: u32, value: i64) {
        self.touch();
        encode::encode_sint64(&mut self.buf, field_number, value);
        self.record_crc.update_field_number(field_number);
        self.record_crc.update_i64(value);
    }

    pub fn write_bool(&mut self, field_number: u32, value: bool) {
        self.touch();
        encode::encode_bool(&mut self.buf, field_number, value);
        self.record_crc.update_field_number(field_number);
        self.record_crc.update_bool(value);
    }

    pub fn write_double(&mut self, field_number: u32, value: f64) {
        self.touch();
        encode::encode_double(&mut self.buf, field_number, value);
        self.record_crc.update_field_number(field_number);
        self.record_crc.update_f64(value);
    }

    /// Tagged uint32 varint; no checksum effect. Framing trailers use it.
    pub fn write_uint32(&mut self, field_number: u32, value: u32) {
        self.touch();
        encode::encode_uint32(&mut self.buf, field_number, value);
    }

    /// Length-delimited tag, varint length, raw bytes. Folds the field number
    /// (through the tag write) and the payload, never the length prefix.
    pub fn write_string(&mut self, field_number: u32, value: &[u8]) {
        self.write_length_delimited_tag(field_number);
        encode::encode_bytes_no_tag(&mut self.buf, value);
        self.record_crc.update(value);
    }

    // -----------------------------------------------------------------------
    // Untagged writes
    // -----------------------------------------------------------------------

    /// Bare varint, used for length prefixes; no checksum effect.
    pub fn write_varint32(&mut self, value: u32) {
        self.touch();
        encode::encode_varint32(&mut self.buf, value);
    }

    pub fn write_string_no_tag(&mut self, value: &[u8]) {
        self.touch();
        encode::encode_bytes_no_tag(&mut self.buf, value);
        self.record_crc.update(value);
    }

    pub fn write_sint64_no_tag(&mut self, value: i64) {
        self.touch();
        encode::encode_sint64_no_tag(&mut self.buf, value);
        self.record_crc.update_i64(value);
    }

    pub fn write_bool_no_tag(&mut self, value: bool) {
        self.touch();
        encode::encode_bool_no_tag(&mut self.buf, value);
        self.record_crc.update_bool(value);
    }

    pub fn write_double_no_tag(&mut self, value: f64) {
        self.touch();
        encode::encode_double_no_tag(&mut self.buf, value);
        self.record_crc.update_f64(value);
    }

    /// Bool payload with no checksum effect (null markers in arrays).
    pub fn write_bool_no_tag_raw(&mut self, value: bool) {
        self.touch();
        encode::encode_bool_no_tag(&mut self.buf, value);
    }
}
