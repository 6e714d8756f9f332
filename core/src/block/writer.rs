//! block/writer.rs
//!
//! Size-triggered block writer.
//!
//! Every block is a complete, self-verifying stream:
//!
//! ```text
//! block := record* META_TOTAL_RECORDS META_CHECKSUM
//! ```
//!
//! so blocks can be uploaded, retried and verified independently.

use bytes::Bytes;
use tracing::{debug, info};

use crate::block::sink::BlockSink;
use crate::config::WriterConfig;
use crate::record::{write_record, Value};
use crate::telemetry::{Stage, TelemetrySnapshot, TelemetryTimer, WriterCounters};
use crate::types::WriterError;
use crate::writer::RecordWriter;

pub struct BlockWriter<S: BlockSink> {
    writer: RecordWriter,
    sink: S,
    block_size: usize,
    next_block_id: u64,
    counters: WriterCounters,
    timer: TelemetryTimer,
}

impl<S: BlockSink> BlockWriter<S> {
    pub fn new(sink: S, config: WriterConfig) -> Result<Self, WriterError> {
        config.validate()?;
        Ok(Self {
            writer: RecordWriter::from_config(&config),
            sink,
            block_size: config.block_size,
            next_block_id: 0,
            counters: WriterCounters::default(),
            timer: TelemetryTimer::new(),
        })
    }

    /// Encode one record; flushes a block once `block_size` is reached.
    pub fn write(&mut self, fields: &[Option<Value>]) -> Result<(), WriterError> {
        let writer = &mut self.writer;
        self.timer
            .time(Stage::Encode, || write_record(writer, fields))?;
        self.counters.add_record();

        if self.writer.byte_count() >= self.block_size {
            self.flush()?;
        }
        Ok(())
    }

    /// Finish the current block with a stream footer and hand it to the sink.
    ///
    /// The writer is reset before the upload; if the sink fails the block is
    /// lost and the error is returned.
    pub fn flush(&mut self) -> Result<(), WriterError> {
        let footer = self.writer.complete();
        self.counters.add_stream();

        let data = self.writer.take_and_reset();

        let block_id = self.next_block_id;
        self.next_block_id += 1;
        info!(
            block_id,
            size = data.len(),
            records = footer.total_records,
            "flushing block"
        );
        self.upload(block_id, data)
    }

    fn upload(&mut self, block_id: u64, data: Bytes) -> Result<(), WriterError> {
        let len = data.len();
        let sink = &mut self.sink;
        self.timer
            .time(Stage::Upload, || sink.upload_block(block_id, data))?;
        self.counters.add_block(len);
        Ok(())
    }

    /// Flush what is buffered (if anything) and return the sink with a
    /// telemetry snapshot.
    pub fn close(mut self) -> Result<(S, TelemetrySnapshot), WriterError> {
        if self.writer.byte_count() > 0 {
            self.flush()?;
        } else {
            debug!("close with empty buffer, no final block");
        }

        let snapshot = TelemetrySnapshot::from(&self.counters, &self.timer);
        info!(
            mib_per_sec = snapshot.throughput_mib_per_sec(),
            blocks = snapshot.blocks,
            records = snapshot.records,
            "block writer closed"
        );
        Ok((self.sink, snapshot))
    }

    pub fn writer(&self) -> &RecordWriter {
        &self.writer
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn counters(&self) -> &WriterCounters {
        &self.counters
    }

    /// Blocks handed to the sink so far.
    pub fn block_count(&self) -> u64 {
        self.next_block_id
    }
}
