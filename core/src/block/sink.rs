//! block/sink.rs
//! Destinations for flushed blocks.

use std::io::{self, Write};

use bytes::Bytes;

/// Receives finished blocks in order. `block_id` starts at 0 and increases
/// by one per call.
pub trait BlockSink {
    fn upload_block(&mut self, block_id: u64, data: Bytes) -> io::Result<()>;
}

impl<S: BlockSink + ?Sized> BlockSink for &mut S {
    fn upload_block(&mut self, block_id: u64, data: Bytes) -> io::Result<()> {
        (**self).upload_block(block_id, data)
    }
}

impl<S: BlockSink + ?Sized> BlockSink for Box<S> {
    fn upload_block(&mut self, block_id: u64, data: Bytes) -> io::Result<()> {
        (**self).upload_block(block_id, data)
    }
}

/// Keeps every block in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub blocks: Vec<(u64, Bytes)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All blocks back to back.
    pub fn concat(&self) -> Vec<u8> {
        self.blocks
            .iter()
            .flat_map(|(_, b)| b.iter())
            .copied()
            .collect()
    }
}

impl BlockSink for MemorySink {
    fn upload_block(&mut self, block_id: u64, data: Bytes) -> io::Result<()> {
        self.blocks.push((block_id, data));
        Ok(())
    }
}

/// Writes blocks back to back into any `io::Write`.
#[derive(Debug)]
pub struct IoSink<W: Write> {
    inner: W,
}

impl<W: Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> BlockSink for IoSink<W> {
    fn upload_block(&mut self, _block_id: u64, data: Bytes) -> io::Result<()> {
        self.inner.write_all(&data)?;
        self.inner.flush()
    }
}
