use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::listing::debug_info::CacheEntryDebugInfo;
use crate::artifacts::listing::pattern::Pattern;
use crate::artifacts::status::inspector::Inspector;
use anyhow::anyhow;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::PathBuf;

/// Which listing to produce. When several selection flags are given the
/// CLI resolves them in a fixed precedence order; commands receive the
/// winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LsFilesMode {
    Cached,
    Stage,
    Modified,
    Deleted,
    Others,
}

#[derive(Debug, Clone, Default)]
pub struct LsFilesOptions {
    pub abbrev: Option<i32>,
    pub format: Option<String>,
    pub debug: bool,
}

impl Repository {
    /// List index entries (or, for `Others`, workspace files the index
    /// does not track).
    ///
    /// `--format` patterns apply to the pathname listings only; the
    /// stage and others listings have their own fixed shapes.
    pub fn ls_files(&self, mode: LsFilesMode, opts: &LsFilesOptions) -> anyhow::Result<()> {
        let pattern = match &opts.format {
            Some(_) if matches!(mode, LsFilesMode::Stage | LsFilesMode::Others) => {
                return Err(anyhow!("--format cannot be used with --stage or --others"));
            }
            Some(format) => Some(Pattern::compile(format)?),
            None => None,
        };

        let mut index = self.index();
        index.parse()?;

        match mode {
            LsFilesMode::Cached => self.list_cached(&index, pattern.as_ref(), opts),
            LsFilesMode::Stage => self.list_stage(&index, opts),
            LsFilesMode::Modified => self.list_modified(&index, pattern.as_ref(), opts),
            LsFilesMode::Deleted => self.list_deleted(&index, pattern.as_ref(), opts),
            LsFilesMode::Others => self.list_others(&index),
        }
    }

    fn list_cached(
        &self,
        index: &Index,
        pattern: Option<&Pattern>,
        opts: &LsFilesOptions,
    ) -> anyhow::Result<()> {
        for entry in index.entries() {
            self.print_entry_line(entry, pattern, opts)?;
        }

        Ok(())
    }

    /// Stage lines: `<octal mode> <object name> <stage>\t<path>`.
    fn list_stage(&self, index: &Index, opts: &LsFilesOptions) -> anyhow::Result<()> {
        for entry in index.entries() {
            let object_name = match opts.abbrev {
                Some(n) if n > 0 => entry.object_name.abbrev(n as usize),
                _ => entry.object_name.as_ref(),
            };

            writeln!(
                self.writer(),
                "{} {} {}\t{}",
                entry.mode,
                object_name,
                entry.flags.stage_number(),
                entry.pathname.display()
            )?;
        }

        Ok(())
    }

    fn list_modified(
        &self,
        index: &Index,
        pattern: Option<&Pattern>,
        opts: &LsFilesOptions,
    ) -> anyhow::Result<()> {
        let inspector = Inspector::new(self.workspace());

        for entry in index.entries() {
            if inspector.is_modified(entry)? {
                self.print_entry_line(entry, pattern, opts)?;
            }
        }

        Ok(())
    }

    fn list_deleted(
        &self,
        index: &Index,
        pattern: Option<&Pattern>,
        opts: &LsFilesOptions,
    ) -> anyhow::Result<()> {
        let inspector = Inspector::new(self.workspace());

        for entry in index.entries() {
            if inspector.is_deleted(entry) {
                self.print_entry_line(entry, pattern, opts)?;
            }
        }

        Ok(())
    }

    /// Workspace files with no index entry, in walk order.
    fn list_others(&self, index: &Index) -> anyhow::Result<()> {
        let tracked = index
            .entries()
            .map(|entry| entry.pathname.clone())
            .collect::<BTreeSet<PathBuf>>();

        for file in self.workspace().list_files()? {
            if !tracked.contains(&file) {
                writeln!(self.writer(), "{}", file.display())?;
            }
        }

        Ok(())
    }

    fn print_entry_line(
        &self,
        entry: &IndexEntry,
        pattern: Option<&Pattern>,
        opts: &LsFilesOptions,
    ) -> anyhow::Result<()> {
        match pattern {
            Some(pattern) => writeln!(self.writer(), "{}", pattern.apply_to(entry))?,
            None => writeln!(self.writer(), "{}", entry.pathname.display())?,
        }

        if opts.debug {
            writeln!(self.writer(), "{}", CacheEntryDebugInfo::new(entry).report())?;
        }

        Ok(())
    }
}
