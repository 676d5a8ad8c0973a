//! Working directory file system operations

use anyhow::Context;
use bytes::Bytes;
use std::fs::Metadata;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 3] = [".git", ".", ".."];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every file under the workspace root, relative to it, in sorted
    /// order, with the `.git` directory skipped.
    pub fn list_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        Ok(WalkDir::new(&self.path)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| self.check_if_not_ignored_file_path(entry.path()))
            .collect::<Vec<_>>())
    }

    fn is_ignored(path: &Path) -> bool {
        // Check if any component of the path is in IGNORED_PATHS
        path.components().any(|component| {
            if let std::path::Component::Normal(name) = component {
                let name_str = name.to_string_lossy();
                IGNORED_PATHS.contains(&name_str.as_ref())
            } else {
                false
            }
        })
    }

    fn check_if_not_ignored_file_path(&self, path: &Path) -> Option<PathBuf> {
        if path.is_file() && !Self::is_ignored(path) {
            Some(path.strip_prefix(self.path.as_ref()).ok()?.to_path_buf())
        } else {
            None
        }
    }

    /// Raw file contents; payloads are bytes, never text.
    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let file_path = self.path.join(file_path);

        let content = std::fs::read(&file_path)
            .context(format!("Unable to read file {}", file_path.display()))?;

        Ok(content.into())
    }

    /// `lstat` the file; symlinks are not followed.
    pub fn stat_file(&self, file_path: &Path) -> anyhow::Result<Metadata> {
        let file_path = self.path.join(file_path);

        std::fs::symlink_metadata(&file_path)
            .context(format!("Unable to stat file {}", file_path.display()))
    }

    pub fn file_exists(&self, file_path: &Path) -> bool {
        self.path.join(file_path).exists()
    }

    /// Write a file under the workspace root, creating any missing
    /// parent directories first.
    pub fn write_file(&self, file_path: &Path, data: &[u8]) -> anyhow::Result<()> {
        let file_path = self.path.join(file_path);

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)
                .context(format!("Unable to create directory {}", parent.display()))?;
        }

        std::fs::write(&file_path, data)
            .context(format!("Unable to write file {}", file_path.display()))
    }
}
