use crate::artifacts::core::RiftError;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Content-addressable object database
///
/// One file per unique digest in a flat namespace under `.rift/objects`.
/// Objects are immutable once written and are never deleted by normal
/// operation.
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        if !object_path.exists() {
            return Err(RiftError::NotFound(object_path).into());
        }

        let object_content = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        Ok(object_content.into())
    }

    /// Store an object and return its digest.
    ///
    /// The digest fully determines the on-disk path, so re-storing content
    /// that already exists is a no-op rather than an error.
    pub fn store(&self, object: &impl Object) -> anyhow::Result<ObjectId> {
        let object_id = object.object_id()?;
        let object_path = self.path.join(object_id.to_path());

        if !object_path.exists() {
            std::fs::create_dir_all(
                object_path
                    .parent()
                    .context(format!("Invalid object path {}", object_path.display()))?,
            )
            .context(format!(
                "Unable to create object directory {}",
                object_path.display()
            ))?;

            let object_content = object.serialize()?;
            self.write_object(object_path, object_content)?;
        }

        Ok(object_id)
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(&object_content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;

        // the object must be on disk before store returns; a crash right
        // after a successful store must not lose it
        file.sync_all().context(format!(
            "Unable to flush object file {}",
            temp_object_path.display()
        ))?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, &object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::objects::blob::Blob;

    fn scratch_database() -> (assert_fs::TempDir, Database) {
        let dir = assert_fs::TempDir::new().unwrap();
        let database = Database::new(dir.path().join("objects").into_boxed_path());
        (dir, database)
    }

    #[test]
    fn stores_and_loads_an_object_by_digest() {
        let (_dir, database) = scratch_database();
        let blob = Blob::new(Bytes::from_static(b"some content"));

        let oid = database.store(&blob).unwrap();
        let loaded = database.load(&oid).unwrap();

        assert_eq!(loaded, Bytes::from_static(b"some content"));
    }

    #[test]
    fn storing_identical_content_twice_is_idempotent() {
        let (_dir, database) = scratch_database();
        let blob = Blob::new(Bytes::from_static(b"same bytes"));

        let first = database.store(&blob).unwrap();
        let second = database.store(&blob).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn loading_a_missing_object_fails_with_not_found() {
        let (_dir, database) = scratch_database();
        let oid = ObjectId::try_parse("0".repeat(64)).unwrap();

        let error = database.load(&oid).unwrap_err();

        assert!(matches!(
            error.downcast_ref::<RiftError>(),
            Some(RiftError::NotFound(_))
        ));
    }
}
