//! Rift index (staging area)
//!
//! The index tracks which files should be included in the next commit,
//! mapping each repository-relative path to the digest of its staged
//! content.
//!
//! ## Index File Format
//!
//! One entry per line: `<path> <digest>\n`. Entries are kept in a sorted
//! map, so repeated persists of an unchanged index are byte-identical. A
//! missing index file is a valid initial state and loads as empty.

use crate::artifacts::core::RiftError;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Rift index (staging area)
///
/// Path is the unique key: staging a path again overwrites its prior
/// digest, representing the latest intended content for that path.
#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (`.rift/index`)
    path: Box<Path>,
    /// Staged entries mapped by path
    entries: BTreeMap<PathBuf, ObjectId>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: BTreeMap::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the index from disk.
    ///
    /// Every persisted `path digest` line is parsed back into the mapping;
    /// a line that does not parse fails with `MalformedIndex`. A missing
    /// index file yields an empty index rather than an error.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.entries.clear();
        self.changed = false;

        if !self.path.exists() {
            return Ok(());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|source| RiftError::Io {
            path: self.path.to_path_buf(),
            source,
        })?;

        for line in content.lines() {
            if line.is_empty() {
                continue;
            }

            let (path, digest) = line
                .rsplit_once(' ')
                .ok_or_else(|| RiftError::MalformedIndex(line.to_string()))?;
            if path.is_empty() {
                return Err(RiftError::MalformedIndex(line.to_string()).into());
            }

            let oid = ObjectId::try_parse(digest.to_string())
                .map_err(|_| RiftError::MalformedIndex(line.to_string()))?;

            self.entries.insert(PathBuf::from(path), oid);
        }

        Ok(())
    }

    /// Stage a path at the given digest; last write wins.
    pub fn add(&mut self, path: PathBuf, oid: ObjectId) {
        self.entries.insert(path, oid);
        self.changed = true;
    }

    /// Remove all entries; safe to call when already empty.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.changed = true;
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entry_by_path(&self, path: &Path) -> Option<&ObjectId> {
        self.entries.get(path)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&PathBuf, &ObjectId)> {
        self.entries.iter()
    }

    /// Snapshot of the staged entries: a defensive copy, not a live view.
    pub fn snapshot(&self) -> BTreeMap<PathBuf, ObjectId> {
        self.entries.clone()
    }

    /// Persist the index, one `path digest` line per entry in sorted path
    /// order. Failures are surfaced, never swallowed.
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        let mut index_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .with_context(|| format!("Unable to open index file {}", self.path.display()))?;

        for (path, oid) in &self.entries {
            writeln!(index_file, "{} {}", path.display(), oid)
                .with_context(|| format!("Unable to write index file {}", self.path.display()))?;
        }

        index_file
            .sync_all()
            .with_context(|| format!("Unable to flush index file {}", self.path.display()))?;
        self.changed = false;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::objects::blob::Blob;
    use crate::artifacts::objects::object::Object;
    use bytes::Bytes;
    use pretty_assertions::assert_eq;

    fn digest_of(content: &'static [u8]) -> ObjectId {
        Blob::new(Bytes::from_static(content)).object_id().unwrap()
    }

    fn scratch_index() -> (assert_fs::TempDir, Index) {
        let dir = assert_fs::TempDir::new().unwrap();
        let index = Index::new(dir.path().join("index").into_boxed_path());
        (dir, index)
    }

    #[test]
    fn loading_a_missing_index_file_yields_an_empty_index() {
        let (_dir, mut index) = scratch_index();

        index.rehydrate().unwrap();

        assert!(index.is_empty());
    }

    #[test]
    fn persisted_entries_are_reconstructed_on_load() {
        let (_dir, mut index) = scratch_index();
        index.add(PathBuf::from("a.txt"), digest_of(b"a"));
        index.add(PathBuf::from("nested/b.txt"), digest_of(b"b"));
        index.write_updates().unwrap();

        let mut reloaded = Index::new(index.path().to_path_buf().into_boxed_path());
        reloaded.rehydrate().unwrap();

        assert_eq!(reloaded.snapshot(), index.snapshot());
        assert_eq!(reloaded.len(), 2);
    }

    #[test]
    fn re_adding_a_path_overwrites_its_digest() {
        let (_dir, mut index) = scratch_index();

        index.add(PathBuf::from("a.txt"), digest_of(b"old"));
        index.add(PathBuf::from("a.txt"), digest_of(b"new"));

        assert_eq!(index.len(), 1);
        assert_eq!(
            index.entry_by_path(Path::new("a.txt")),
            Some(&digest_of(b"new"))
        );
    }

    #[test]
    fn serialization_of_an_unchanged_index_is_byte_identical() {
        let (_dir, mut index) = scratch_index();
        index.add(PathBuf::from("b.txt"), digest_of(b"b"));
        index.add(PathBuf::from("a.txt"), digest_of(b"a"));

        index.write_updates().unwrap();
        let first = std::fs::read(index.path()).unwrap();

        index.rehydrate().unwrap();
        index.write_updates().unwrap();
        let second = std::fs::read(index.path()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn clear_is_idempotent() {
        let (_dir, mut index) = scratch_index();
        index.add(PathBuf::from("a.txt"), digest_of(b"a"));

        index.clear();
        index.clear();

        assert!(index.is_empty());
    }

    #[test]
    fn malformed_line_fails_with_a_typed_error() {
        let (_dir, mut index) = scratch_index();
        std::fs::write(index.path(), "a.txt not-a-digest\n").unwrap();

        let error = index.rehydrate().unwrap_err();

        assert!(matches!(
            error.downcast_ref::<RiftError>(),
            Some(RiftError::MalformedIndex(_))
        ));
    }

    #[test]
    fn paths_with_spaces_round_trip() {
        let (_dir, mut index) = scratch_index();
        index.add(PathBuf::from("with space.txt"), digest_of(b"s"));
        index.write_updates().unwrap();

        let mut reloaded = Index::new(index.path().to_path_buf().into_boxed_path());
        reloaded.rehydrate().unwrap();

        assert_eq!(
            reloaded.entry_by_path(Path::new("with space.txt")),
            Some(&digest_of(b"s"))
        );
    }
}
