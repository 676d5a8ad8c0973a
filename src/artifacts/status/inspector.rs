//! Unstaged change detection
//!
//! Compares one index entry against the file it tracks. Cheap stat
//! comparisons go first; the file content is re-hashed only when size
//! and mode agree and nothing else can tell the versions apart.

use crate::areas::database::Database;
use crate::areas::workspace::Workspace;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::object_kind::ObjectKind;
use derive_new::new;
use std::os::unix::prelude::MetadataExt;

/// Owner execute bit of the mode word
const OWNER_EXECUTE: u32 = 0o100;

/// Regular-file type bit of the mode word
const FILE_TYPE: u32 = 0o100000;

#[derive(new)]
pub struct Inspector<'w> {
    workspace: &'w Workspace,
}

impl Inspector<'_> {
    /// An unstaged deletion: the tracked path no longer exists.
    pub fn is_deleted(&self, entry: &IndexEntry) -> bool {
        !self.workspace.file_exists(&entry.pathname)
    }

    /// An unstaged modification; a deletion counts as one too.
    pub fn is_modified(&self, entry: &IndexEntry) -> anyhow::Result<bool> {
        if self.is_deleted(entry) {
            return Ok(true);
        }

        let stat = self.workspace.stat_file(&entry.pathname)?;
        let staged_mode = entry.mode.as_u32();
        let actual_mode = stat.mode();

        if (actual_mode ^ staged_mode) & OWNER_EXECUTE != 0 {
            return Ok(true);
        }
        if (actual_mode & FILE_TYPE) != (staged_mode & FILE_TYPE) {
            return Ok(true);
        }
        if u64::from(entry.file_size) != stat.size() {
            return Ok(true);
        }

        // stat data agrees; only the content hash can tell
        let content = self.workspace.read_file(&entry.pathname)?;
        let oid = Database::hash(&ObjectKind::new("blob"), &content)?;

        Ok(oid != entry.object_name)
    }
}
