//! writer/framing.rs
//!
//! Record boundaries, stream footer and buffer lifecycle.
//!
//! Stream layout:
//!
//! ```text
//! record*  := caller_field* RECORD_END(uint32 = record crc)
//! footer   := META_TOTAL_RECORDS(sint64 = n) META_CHECKSUM(uint32 = stream crc)
//! stream   := record* footer
//! ```

use bytes::{Bytes, BytesMut};
use tracing::{debug, trace};

use crate::constants::reserved_tags;
use crate::wire::encode;
use crate::writer::core::RecordWriter;
use crate::writer::types::{StreamFooter, WriterState};

impl RecordWriter {
    /// Close the current record.
    ///
    /// Appends `RECORD_END` carrying the record checksum, folds that checksum
    /// into the stream checksum, clears the record checksum and bumps the
    /// record count. Returns the checksum that was written.
    pub fn end_record(&mut self) -> u32 {
        let record_crc = self.record_crc.value();

        encode::encode_uint32(&mut self.buf, reserved_tags::RECORD_END, record_crc);
        self.stream_crc.update_u32(record_crc);
        self.record_crc.reset();
        self.record_count += 1;
        self.state = WriterState::RecordBoundary;

        trace!(
            record = self.record_count,
            checksum = record_crc,
            bytes = self.buf.len(),
            "record end"
        );
        record_crc
    }

    /// Append the stream footer and clear the counters.
    ///
    /// The buffer is kept, so the writer can go on with another stream
    /// segment right after the footer.
    pub fn complete(&mut self) -> StreamFooter {
        let footer = StreamFooter {
            total_records: self.record_count,
            checksum: self.stream_crc.value(),
        };

        encode::encode_sint64(
            &mut self.buf,
            reserved_tags::META_TOTAL_RECORDS,
            footer.total_records,
        );
        encode::encode_uint32(&mut self.buf, reserved_tags::META_CHECKSUM, footer.checksum);

        self.record_count = 0;
        self.record_crc.reset();
        self.stream_crc.reset();
        self.state = WriterState::Complete;

        debug!(
            total_records = footer.total_records,
            checksum = footer.checksum,
            bytes = self.buf.len(),
            "stream complete"
        );
        footer
    }

    /// Drop the buffer and every counter; the writer behaves as new.
    pub fn reset(&mut self) {
        trace!(discarded = self.buf.len(), state = self.state.as_str(), "reset");

        self.buf = BytesMut::with_capacity(self.initial_capacity);
        self.reset_accumulators();
    }

    /// Hand out the buffered bytes, then reset. Equivalent to `take_bytes`
    /// followed by `reset`, but the fresh buffer from `take_bytes` is kept
    /// instead of allocating another one.
    pub fn take_and_reset(&mut self) -> Bytes {
        let out = self.take_bytes();
        trace!(taken = out.len(), state = self.state.as_str(), "take and reset");
        self.reset_accumulators();
        out
    }

    fn reset_accumulators(&mut self) {
        self.record_crc.reset();
        self.stream_crc.reset();
        self.record_count = 0;
        self.state = WriterState::Idle;
    }

    /// Hand out the buffered bytes and start an empty buffer, keeping the
    /// record and stream accumulators. Lets one logical stream leave the
    /// writer in several chunks with a single footer at the end.
    pub fn take_bytes(&mut self) -> Bytes {
        let out = self.buf.split().freeze();
        if self.buf.capacity() < self.initial_capacity {
            self.buf.reserve(self.initial_capacity);
        }
        out
    }

    /// Put bytes handed out by `take_bytes` back in front of the buffer.
    ///
    /// Accumulators are untouched, so after a failed hand-off the buffer
    /// and the counters describe the same records again.
    pub fn restore_bytes(&mut self, data: Bytes) {
        if data.is_empty() {
            return;
        }
        let mut buf = BytesMut::with_capacity(
            (data.len() + self.buf.len()).max(self.initial_capacity),
        );
        buf.extend_from_slice(&data);
        buf.extend_from_slice(&self.buf);
        self.buf = buf;
    }
}
