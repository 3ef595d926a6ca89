use crate::areas::repository::Repository;
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    /// Create the on-disk repository structure.
    ///
    /// Safe to re-run on an initialized repository: existing directories
    /// are kept, HEAD is reset to the default symbolic ref, and staged
    /// index entries are left untouched.
    pub fn init(&mut self) -> anyhow::Result<()> {
        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .rift/objects directory")?;

        fs::create_dir_all(self.refs().refs_path())
            .context("Failed to create .rift/refs directory")?;

        self.refs()
            .set_default_head()
            .context("Failed to create initial HEAD reference")?;

        writeln!(
            self.writer(),
            "Initialized empty Rift repository in {}",
            self.path().display()
        )?;

        Ok(())
    }
}
