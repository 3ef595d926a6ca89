use crate::artifacts::core::RiftError;
use crate::artifacts::ignore::IgnoreMatcher;
use anyhow::Context;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Working directory file system operations
///
/// All paths exposed by the workspace are repository-relative.
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

    pub fn file_exists(&self, file_path: &Path) -> bool {
        self.path.join(file_path).is_file()
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let full_path = self.path.join(file_path);

        if !full_path.is_file() {
            return Err(RiftError::NotFound(file_path.to_path_buf()).into());
        }

        let content = std::fs::read(&full_path).map_err(|source| RiftError::Io {
            path: full_path,
            source,
        })?;

        Ok(content.into())
    }

    /// Recursively enumerate repository-relative file paths, consulting the
    /// ignore matcher per file and per directory.
    ///
    /// An ignored directory is pruned entirely: its subtree is never
    /// visited, so large ignored trees like build output are not walked.
    pub fn list_files(&self, ignores: &IgnoreMatcher) -> anyhow::Result<Vec<PathBuf>> {
        let walker = WalkDir::new(&*self.path)
            .into_iter()
            .filter_entry(|entry| match entry.path().strip_prefix(&*self.path) {
                Ok(relative) if relative.as_os_str().is_empty() => true,
                Ok(relative) => !ignores.should_ignore(relative),
                Err(_) => false,
            });

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.context("Unable to walk workspace directory")?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&*self.path)
                .context("Walked entry escaped the workspace root")?;
            files.push(relative.to_path_buf());
        }

        files.sort();
        Ok(files)
    }
}
