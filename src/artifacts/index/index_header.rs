//! Index file header

use crate::artifacts::stream::ByteStream;
use bytes::Bytes;
use derive_new::new;
use std::io::BufRead;

/// The 12-byte header: signature tag, format version, entry count.
///
/// Signature and version are surfaced exactly as read; unknown values
/// are not rejected. The entry count is the only field the parser acts
/// on.
#[derive(Debug, Clone, Default, PartialEq, Eq, new)]
pub struct IndexHeader {
    pub signature: Bytes,
    pub version: u32,
    pub entries_count: u32,
}

impl IndexHeader {
    pub fn read_from<R: BufRead>(stream: &mut ByteStream<R>) -> anyhow::Result<Self> {
        let signature = stream.read_bytes(4)?;
        let version = stream.read_u32()?;
        let entries_count = stream.read_u32()?;

        Ok(IndexHeader::new(signature, version, entries_count))
    }
}
