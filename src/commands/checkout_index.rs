use crate::areas::repository::Repository;
use crate::artifacts::index::index_entry::IndexEntry;
use anyhow::anyhow;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct CheckoutIndexOptions {
    pub all: bool,
    pub prefix: Option<String>,
    pub files: Vec<String>,
}

impl Repository {
    /// Copy staged blobs out of the object database into the working
    /// tree.
    ///
    /// A path that already exists is reported and left untouched; there
    /// is no force mode. The prefix is plain string concatenation, so a
    /// directory prefix needs its trailing slash spelled out.
    pub fn checkout_index(&self, opts: &CheckoutIndexOptions) -> anyhow::Result<()> {
        let mut index = self.index();
        index.parse()?;

        let prefix = opts.prefix.as_deref().unwrap_or("");

        if opts.all {
            for entry in index.entries() {
                self.checkout_entry(entry, prefix)?;
            }

            return Ok(());
        }

        for file in &opts.files {
            let entry = index
                .entry_by_path(Path::new(file))
                .ok_or_else(|| anyhow!("{file} is not in the cache"))?;

            self.checkout_entry(entry, prefix)?;
        }

        Ok(())
    }

    fn checkout_entry(&self, entry: &IndexEntry, prefix: &str) -> anyhow::Result<()> {
        let target = PathBuf::from(format!("{prefix}{}", entry.pathname.display()));

        if self.workspace().file_exists(&target) {
            writeln!(self.writer(), "file {} exists", target.display())?;
            return Ok(());
        }

        let blob = self.database().load(&entry.object_name)?;

        self.workspace().write_file(&target, &blob.payload)
    }
}
