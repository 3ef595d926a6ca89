use crate::areas::repository::Repository;
use crate::artifacts::core::RiftError;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    /// Snapshot the staging index into a commit object and advance HEAD.
    ///
    /// The commit object is written before HEAD moves and the index is
    /// cleared last: a failure part-way leaves at worst a harmless
    /// content-addressed object behind with the index intact, so the
    /// operation is safely retryable.
    pub fn commit(&mut self, message: &str) -> anyhow::Result<ObjectId> {
        let mut index = self.index();
        index.rehydrate()?;

        if index.is_empty() {
            return Err(RiftError::NothingToCommit.into());
        }

        let files = index.snapshot().into_keys().collect::<Vec<_>>();
        let timestamp = chrono::Local::now().fixed_offset();
        let commit = Commit::new(message.trim().to_string(), timestamp, files);

        let commit_id = self.database().store(&commit)?;
        self.refs().update_head(&commit_id)?;

        index.clear();
        index.write_updates()?;
        drop(index);

        writeln!(
            self.writer(),
            "Committed successfully with hash: {}",
            commit_id.to_short_oid()
        )?;

        Ok(commit_id)
    }
}
