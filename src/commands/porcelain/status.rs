use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Report the currently staged entries without mutating any state.
    ///
    /// An empty index reports a distinct "nothing staged" line rather than
    /// printing nothing at all.
    pub fn status(&mut self) -> anyhow::Result<()> {
        let mut index = self.index();
        index.rehydrate()?;

        if index.is_empty() {
            writeln!(self.writer(), "Nothing staged for commit")?;
            return Ok(());
        }

        writeln!(self.writer(), "Changes to be committed:")?;
        for (path, _) in index.entries() {
            writeln!(self.writer(), "  modified: {}", path.display())?;
        }

        Ok(())
    }
}
