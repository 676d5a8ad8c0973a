//! Cache metadata block of `ls-files --debug`

use crate::artifacts::index::index_entry::IndexEntry;
use derive_new::new;

/// Renders the stat fields of one entry, printed right below its listing
/// line. Times are `seconds:nanoseconds`; the flags word is shown raw.
#[derive(new)]
pub struct CacheEntryDebugInfo<'e> {
    entry: &'e IndexEntry,
}

impl CacheEntryDebugInfo<'_> {
    pub fn report(&self) -> String {
        [
            format!(
                "  ctime: {}:{}",
                self.entry.ctime_seconds, self.entry.ctime_nanoseconds
            ),
            format!(
                "  mtime: {}:{}",
                self.entry.mtime_seconds, self.entry.mtime_nanoseconds
            ),
            format!("  dev: {}\tino: {}", self.entry.dev, self.entry.ino),
            format!("  uid: {}\tgid: {}", self.entry.uid, self.entry.gid),
            format!(
                "  size: {}\tflags: {}",
                self.entry.file_size,
                self.entry.flags.raw()
            ),
        ]
        .join("\n")
    }
}
