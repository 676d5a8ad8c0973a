//! Tree object decoding and traversal
//!
//! A tree payload is a flat run of entries, each `<octal mode> <name>\0`
//! followed by the 20-byte object name. There is no count or length
//! prefix: the payload ends when the bytes do. Decoding preserves the
//! stored entry order; nothing re-sorts.

use crate::areas::database::Database;
use crate::artifacts::objects::OBJECT_NAME_SIZE;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::stream::ByteStream;
use anyhow::anyhow;
use derive_new::new;
use std::io::Cursor;
use std::path::Path;

/// Directory sentinel values in an entry's mode text. Writers differ on
/// the leading zero, so both spellings count.
const TREE_MODE: &str = "40000";
const TREE_MODE_PADDED: &str = "040000";

/// One row of a decoded tree: mode text exactly as stored, entry name,
/// and the object the entry points at.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TreeEntry {
    pub mode: String,
    pub name: String,
    pub oid: ObjectId,
}

impl TreeEntry {
    /// A nested tree is identified by its mode text alone.
    pub fn is_tree(&self) -> bool {
        self.mode == TREE_MODE || self.mode == TREE_MODE_PADDED
    }
}

/// A decoded tree object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    /// Decode a tree object's payload.
    ///
    /// An empty payload is a valid empty tree. A payload that ends in the
    /// middle of an entry is corrupt and fatal.
    pub fn decode(payload: impl Into<bytes::Bytes>) -> anyhow::Result<Self> {
        let mut stream = ByteStream::new(Cursor::new(payload.into()));
        let mut entries = Vec::new();

        while !stream.at_end()? {
            let mode_bytes = stream.read_terminated(b' ')?;
            let mode = String::from_utf8(mode_bytes.to_vec())
                .map_err(|_| anyhow!("invalid mode text in tree entry"))?;

            let name_bytes = stream.read_terminated(b'\0')?;
            let name = String::from_utf8(name_bytes.to_vec())
                .map_err(|_| anyhow!("invalid name in tree entry"))?;

            let oid = ObjectId::from_binary(&stream.read_bytes(OBJECT_NAME_SIZE)?)?;

            entries.push(TreeEntry::new(mode, name, oid));
        }

        Ok(Tree { entries })
    }

    /// Entries in stored order.
    pub fn entries(&self) -> impl Iterator<Item = &TreeEntry> {
        self.entries.iter()
    }
}

/// Depth-first walk over a stored tree.
///
/// Each visited entry is handed to the visitor as it is decoded: a parent
/// directory entry is emitted before the contents of its sub-tree, and
/// the stored order is preserved at every level. Paths are accumulated
/// relative to the walk root.
#[derive(new)]
pub struct TreeWalk<'d> {
    database: &'d Database,
}

impl TreeWalk<'_> {
    pub fn walk<F>(&self, root: &ObjectId, recursive: bool, visitor: &mut F) -> anyhow::Result<()>
    where
        F: FnMut(&Path, &TreeEntry) -> anyhow::Result<()>,
    {
        self.walk_tree(root, Path::new(""), recursive, visitor)
    }

    fn walk_tree<F>(
        &self,
        oid: &ObjectId,
        prefix: &Path,
        recursive: bool,
        visitor: &mut F,
    ) -> anyhow::Result<()>
    where
        F: FnMut(&Path, &TreeEntry) -> anyhow::Result<()>,
    {
        let object = self.database.load(oid)?;
        let tree = Tree::decode(object.payload)?;

        for entry in tree.entries() {
            let path = prefix.join(&entry.name);
            visitor(&path, entry)?;

            if recursive && entry.is_tree() {
                self.walk_tree(&entry.oid, &path, recursive, visitor)?;
            }
        }

        Ok(())
    }
}
