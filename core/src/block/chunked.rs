//! block/chunked.rs
//!
//! One logical stream, shipped in size-bounded chunks.
//!
//! Unlike `BlockWriter`, chunks are not self-contained: the record count and
//! stream checksum carry across chunk boundaries and a single footer closes
//! the whole stream. Concatenating every chunk yields exactly what one
//! unflushed `RecordWriter` would have produced.

use tracing::{debug, info, warn};

use crate::block::sink::BlockSink;
use crate::config::WriterConfig;
use crate::record::{write_record, Value};
use crate::telemetry::{Stage, TelemetrySnapshot, TelemetryTimer, WriterCounters};
use crate::types::WriterError;
use crate::writer::{RecordWriter, StreamFooter};

pub struct ChunkedWriter<S: BlockSink> {
    writer: RecordWriter,
    sink: S,
    chunk_size: usize,
    next_chunk_id: u64,
    counters: WriterCounters,
    timer: TelemetryTimer,
}

impl<S: BlockSink> ChunkedWriter<S> {
    pub fn new(sink: S, config: WriterConfig) -> Result<Self, WriterError> {
        config.validate()?;
        Ok(Self {
            writer: RecordWriter::from_config(&config),
            sink,
            chunk_size: config.block_size,
            next_chunk_id: 0,
            counters: WriterCounters::default(),
            timer: TelemetryTimer::new(),
        })
    }

    pub fn write(&mut self, fields: &[Option<Value>]) -> Result<(), WriterError> {
        let writer = &mut self.writer;
        self.timer
            .time(Stage::Encode, || write_record(writer, fields))?;
        self.counters.add_record();

        if self.writer.byte_count() >= self.chunk_size {
            self.flush()?;
        }
        Ok(())
    }

    /// Ship the buffered bytes as the next chunk. No footer is written and
    /// an empty buffer ships nothing.
    ///
    /// If the sink fails, the chunk goes back in front of the buffer and
    /// the chunk id is not consumed: buffer, record count and stream
    /// checksum still agree, and a later `flush` or `close` retries the same
    /// bytes.
    pub fn flush(&mut self) -> Result<(), WriterError> {
        if self.writer.byte_count() == 0 {
            debug!("flush with empty buffer, no chunk");
            return Ok(());
        }

        let data = self.writer.take_bytes();
        let len = data.len();
        let chunk_id = self.next_chunk_id;

        debug!(
            chunk_id,
            size = len,
            pending_records = self.writer.record_count(),
            "flushing chunk"
        );

        let sink = &mut self.sink;
        let uploaded = self
            .timer
            .time(Stage::Upload, || sink.upload_block(chunk_id, data.clone()));
        if let Err(err) = uploaded {
            warn!(chunk_id, size = len, error = %err, "chunk upload failed, keeping bytes");
            self.writer.restore_bytes(data);
            return Err(err.into());
        }

        self.next_chunk_id += 1;
        self.counters.add_block(len);
        Ok(())
    }

    /// Write the stream footer, ship the final chunk and return the sink.
    pub fn close(mut self) -> Result<(S, StreamFooter, TelemetrySnapshot), WriterError> {
        let footer = self.writer.complete();
        self.counters.add_stream();
        self.flush()?;

        let snapshot = TelemetrySnapshot::from(&self.counters, &self.timer);
        info!(
            total_records = footer.total_records,
            checksum = footer.checksum,
            chunks = snapshot.blocks,
            mib_per_sec = snapshot.throughput_mib_per_sec(),
            "chunked stream closed"
        );
        Ok((self.sink, footer, snapshot))
    }

    pub fn writer(&self) -> &RecordWriter {
        &self.writer
    }

    pub fn counters(&self) -> &WriterCounters {
        &self.counters
    }
}
