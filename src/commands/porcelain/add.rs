use crate::areas::repository::Repository;
use crate::artifacts::core::RiftError;
use crate::artifacts::objects::blob::Blob;
use std::path::Path;

impl Repository {
    /// Stage a single repository-relative file.
    ///
    /// The ignore check runs before anything touches the database, so an
    /// excluded path never leaves an orphan blob behind. The index is
    /// persisted before this returns.
    pub fn add_file(&mut self, file_path: &Path) -> anyhow::Result<()> {
        if self.ignores().should_ignore(file_path) {
            return Err(RiftError::Ignored(file_path.to_path_buf()).into());
        }

        if !self.workspace().file_exists(file_path) {
            return Err(RiftError::NotFound(file_path.to_path_buf()).into());
        }

        let data = self.workspace().read_file(file_path)?;
        let blob = Blob::new(data);
        let blob_id = self.database().store(&blob)?;

        let mut index = self.index();
        index.rehydrate()?;
        index.add(file_path.to_path_buf(), blob_id);
        index.write_updates()?;

        Ok(())
    }

    /// Stage every non-ignored file in the working tree.
    ///
    /// Fails fast on the first file-level failure, leaving the files
    /// staged so far in the index.
    pub fn add_all_files(&mut self) -> anyhow::Result<()> {
        let files = self.workspace().list_files(self.ignores())?;

        for file in files {
            self.add_file(&file)?;
        }

        Ok(())
    }
}
