//! One tracked path's staged metadata
//!
//! On disk an entry is 62 fixed bytes - ten 32-bit stat fields, the
//! 20-byte object name and the 16-bit flags word - followed by the
//! pathname, a NUL, and zero padding up to the next 8-byte boundary
//! measured from the entry's start. Field order is load-bearing; every
//! integer is big-endian.

use crate::artifacts::index::flags::Flags;
use crate::artifacts::index::mode::Mode;
use crate::artifacts::index::{ENTRY_BLOCK, ENTRY_FIXED_SIZE};
use crate::artifacts::objects::OBJECT_NAME_SIZE;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::stream::ByteStream;
use anyhow::anyhow;
use std::io::BufRead;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub ctime_seconds: u32,
    pub ctime_nanoseconds: u32,
    pub mtime_seconds: u32,
    pub mtime_nanoseconds: u32,
    pub dev: u32,
    pub ino: u32,
    pub mode: Mode,
    pub uid: u32,
    pub gid: u32,
    pub file_size: u32,
    pub object_name: ObjectId,
    pub flags: Flags,
    pub pathname: PathBuf,
}

impl IndexEntry {
    /// Decode one entry, leaving the stream positioned on the next one.
    ///
    /// The pathname length comes from the flags word, the padding from
    /// the alignment rule; the padding bytes themselves are skipped
    /// without being checked.
    pub fn read_from<R: BufRead>(stream: &mut ByteStream<R>) -> anyhow::Result<Self> {
        let ctime_seconds = stream.read_u32()?;
        let ctime_nanoseconds = stream.read_u32()?;
        let mtime_seconds = stream.read_u32()?;
        let mtime_nanoseconds = stream.read_u32()?;
        let dev = stream.read_u32()?;
        let ino = stream.read_u32()?;
        let mode = Mode::try_parse(stream.read_u32()?)?;
        let uid = stream.read_u32()?;
        let gid = stream.read_u32()?;
        let file_size = stream.read_u32()?;
        let object_name = ObjectId::from_binary(&stream.read_bytes(OBJECT_NAME_SIZE)?)?;
        let flags = Flags::from(stream.read_u16()?);

        let pathname_size = flags.pathname_size();
        let pathname_bytes = stream.read_bytes(pathname_size)?;
        let pathname = PathBuf::from(
            std::str::from_utf8(&pathname_bytes)
                .map_err(|_| anyhow!("invalid UTF-8 in index entry pathname"))?,
        );

        // the pathname's NUL plus the alignment padding
        stream.skip(Self::padding_size(pathname_size) + 1)?;

        Ok(IndexEntry {
            ctime_seconds,
            ctime_nanoseconds,
            mtime_seconds,
            mtime_nanoseconds,
            dev,
            ino,
            mode,
            uid,
            gid,
            file_size,
            object_name,
            flags,
            pathname,
        })
    }

    /// Zero bytes following the pathname's NUL so that the whole entry
    /// ends on an [`ENTRY_BLOCK`] boundary.
    pub fn padding_size(pathname_size: usize) -> usize {
        (ENTRY_BLOCK - (ENTRY_FIXED_SIZE + pathname_size + 1) % ENTRY_BLOCK) % ENTRY_BLOCK
    }
}
