//! Staging index area (read side)
//!
//! Loads `.git/index` into memory: the header plus every entry, in
//! stored order. A shared lock is held while reading so the bytes
//! belong to one stable snapshot. Entries are trusted as stored -
//! nothing here re-sorts or validates signature and version - and
//! extensions plus the trailing checksum stay unread.

use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::index::index_header::IndexHeader;
use crate::artifacts::stream::ByteStream;
use anyhow::Context;
use std::io::BufReader;
use std::ops::DerefMut;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Index {
    path: Box<Path>,
    header: IndexHeader,
    entries: Vec<IndexEntry>,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            header: IndexHeader::default(),
            entries: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the index file, replacing any previously loaded state.
    ///
    /// A missing or zero-length file is an empty index. Acquires a
    /// shared lock on the index file during reading.
    pub fn parse(&mut self) -> anyhow::Result<()> {
        self.clear();

        if !self.path().exists() {
            return Ok(());
        }

        let mut index_file = std::fs::OpenOptions::new()
            .read(true)
            .open(self.path())
            .context(format!("Unable to open index file {}", self.path().display()))?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)?;

        if lock.deref_mut().metadata()?.len() == 0 {
            return Ok(());
        }

        let mut stream = ByteStream::new(BufReader::new(lock.deref_mut()));

        self.header = IndexHeader::read_from(&mut stream)?;

        // entry count comes from the header; short counts fail inside
        // the entry parser as short reads
        for _ in 0..self.header.entries_count {
            self.entries.push(IndexEntry::read_from(&mut stream)?);
        }

        // extensions and the trailing checksum stay unread
        Ok(())
    }

    pub fn signature(&self) -> &[u8] {
        &self.header.signature
    }

    pub fn version(&self) -> u32 {
        self.header.version
    }

    pub fn entries_count(&self) -> u32 {
        self.header.entries_count
    }

    /// Entries in stored order (writers keep them pathname-sorted; the
    /// parser does not enforce it).
    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.iter()
    }

    /// Look up an entry by its exact pathname.
    pub fn entry_by_path(&self, path: &Path) -> Option<&IndexEntry> {
        self.entries.iter().find(|entry| entry.pathname == path)
    }

    fn clear(&mut self) {
        self.header = IndexHeader::default();
        self.entries.clear();
    }
}
