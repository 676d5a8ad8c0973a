//! Binary stream reader
//!
//! Sequential reader shared by the index parser, the tree decoder and the
//! object codec. Every read is described by a [`Shape`]: either a fixed
//! byte count or a terminator byte. Integer fields are big-endian
//! (network byte order), matching the on-disk index format.

use anyhow::anyhow;
use byteorder::{ByteOrder, NetworkEndian};
use bytes::Bytes;
use std::io::BufRead;

/// Shape of the next field to pull from the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Exactly this many bytes; fewer left in the stream is a fatal
    /// short read.
    Fixed(usize),
    /// Bytes up to the given terminator, which is consumed and dropped.
    /// Hitting end-of-stream first is a fatal unterminated field.
    Terminated(u8),
}

/// Sequential reader over a byte source.
///
/// Purely forward-moving; the only cursor is the one owned by the
/// underlying source.
#[derive(Debug)]
pub struct ByteStream<R> {
    source: R,
}

impl<R: BufRead> ByteStream<R> {
    pub fn new(source: R) -> Self {
        ByteStream { source }
    }

    /// Read one field of the given shape from the next bytes of the
    /// source.
    pub fn fill(&mut self, shape: Shape) -> anyhow::Result<Bytes> {
        match shape {
            Shape::Fixed(size) => {
                let mut buffer = vec![0; size];
                self.source
                    .read_exact(&mut buffer)
                    .map_err(|_| anyhow!("short read: expected {size} more bytes"))?;

                Ok(Bytes::from(buffer))
            }
            Shape::Terminated(terminator) => {
                let mut buffer = Vec::new();
                let read = self.source.read_until(terminator, &mut buffer)?;

                if read == 0 || buffer.last() != Some(&terminator) {
                    return Err(anyhow!(
                        "unterminated field: no {terminator:#04x} byte before end of stream"
                    ));
                }

                buffer.pop(); // drop the terminator
                Ok(Bytes::from(buffer))
            }
        }
    }

    pub fn read_u16(&mut self) -> anyhow::Result<u16> {
        let bytes = self.fill(Shape::Fixed(2))?;
        Ok(NetworkEndian::read_u16(&bytes))
    }

    pub fn read_u32(&mut self) -> anyhow::Result<u32> {
        let bytes = self.fill(Shape::Fixed(4))?;
        Ok(NetworkEndian::read_u32(&bytes))
    }

    pub fn read_bytes(&mut self, size: usize) -> anyhow::Result<Bytes> {
        self.fill(Shape::Fixed(size))
    }

    pub fn read_terminated(&mut self, terminator: u8) -> anyhow::Result<Bytes> {
        self.fill(Shape::Terminated(terminator))
    }

    /// Consume and discard the next `size` bytes (alignment padding).
    pub fn skip(&mut self, size: usize) -> anyhow::Result<()> {
        self.fill(Shape::Fixed(size)).map(|_| ())
    }

    /// True once the source has no bytes left.
    pub fn at_end(&mut self) -> anyhow::Result<bool> {
        Ok(self.source.fill_buf()?.is_empty())
    }

    /// Drain whatever is left of the source.
    pub fn remaining(&mut self) -> anyhow::Result<Bytes> {
        let mut buffer = Vec::new();
        self.source.read_to_end(&mut buffer)?;

        Ok(Bytes::from(buffer))
    }
}

/// Lowercase hexadecimal rendering of a raw byte field.
pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}
