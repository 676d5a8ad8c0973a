use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::{TreeEntry, TreeWalk};
use anyhow::anyhow;
use std::io::Write;
use std::path::Path;

/// Commit payloads name their root tree on a `tree <digest>` line.
const TREE_HEADER_REGEX: &str = r"(?m)^tree ([0-9a-f]{40})$";

#[derive(Debug, Clone, Default)]
pub struct LsTreeOptions {
    pub recursive: bool,
    pub trees_only: bool,
    pub show_trees: bool,
    pub name_only: bool,
    pub object_only: bool,
    pub long_format: bool,
    pub abbrev: Option<i32>,
}

impl Repository {
    /// List a tree object's contents.
    ///
    /// Accepts a tree digest or unique prefix; a commit is accepted too
    /// and resolves to its root tree. Without `recursive` only the top
    /// level is listed; with it, blobs of every level are listed and
    /// sub-tree entries themselves appear only with `show_trees` or
    /// `trees_only`.
    pub fn ls_tree(&self, treeish: &str, opts: &LsTreeOptions) -> anyhow::Result<()> {
        let root = self.resolve_tree(treeish)?;
        let walk = TreeWalk::new(self.database());

        walk.walk(&root, opts.recursive, &mut |path, entry| {
            if Self::should_list(entry, opts) {
                self.print_tree_entry(path, entry, opts)?;
            }
            Ok(())
        })
    }

    fn resolve_tree(&self, treeish: &str) -> anyhow::Result<ObjectId> {
        let object_id = self.database().resolve_prefix(treeish)?;
        let raw = self.database().load(&object_id)?;

        if raw.kind.is_tree() {
            return Ok(object_id);
        }

        if raw.kind.is_commit() {
            let payload = String::from_utf8(raw.payload.to_vec())
                .map_err(|_| anyhow!("invalid commit object {object_id}"))?;
            let tree_header = regex::Regex::new(TREE_HEADER_REGEX)?
                .captures(&payload)
                .ok_or_else(|| anyhow!("commit object {object_id} has no tree header"))?;

            return ObjectId::try_parse(tree_header[1].to_string());
        }

        Err(anyhow!("not a tree object: {treeish}"))
    }

    fn should_list(entry: &TreeEntry, opts: &LsTreeOptions) -> bool {
        if entry.is_tree() {
            !opts.recursive || opts.show_trees || opts.trees_only
        } else {
            !opts.trees_only
        }
    }

    fn print_tree_entry(
        &self,
        path: &Path,
        entry: &TreeEntry,
        opts: &LsTreeOptions,
    ) -> anyhow::Result<()> {
        if opts.name_only {
            writeln!(self.writer(), "{}", path.display())?;
            return Ok(());
        }

        let object_name = match opts.abbrev {
            Some(n) if n > 0 => entry.oid.abbrev(n as usize),
            _ => entry.oid.as_ref(),
        };

        if opts.object_only {
            writeln!(self.writer(), "{object_name}")?;
            return Ok(());
        }

        let mode = u32::from_str_radix(&entry.mode, 8)
            .map_err(|_| anyhow!("invalid mode text {} in tree entry", entry.mode))?;
        let object_type = if entry.is_tree() { "tree" } else { "blob" };

        if opts.long_format {
            let size = if entry.is_tree() {
                "-".to_string()
            } else {
                self.database().load(&entry.oid)?.size.to_string()
            };

            writeln!(
                self.writer(),
                "{mode:06o} {object_type} {object_name} {size:>7}\t{}",
                path.display()
            )?;
        } else {
            writeln!(
                self.writer(),
                "{mode:06o} {object_type} {object_name}\t{}",
                path.display()
            )?;
        }

        Ok(())
    }
}
