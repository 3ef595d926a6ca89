//! Rift head pointer
//!
//! The head records the current state of the repository as a single line in
//! `.rift/HEAD`:
//!
//! - `ref: refs/heads/main` — symbolic form, written by init
//! - `commit: <digest>` — direct form, written by every commit
//!
//! Exactly one head value exists per repository at any time. Resolving the
//! symbolic form back to a branch file is not implemented.

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};

/// Regex pattern for parsing the symbolic head form
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Regex pattern for parsing the direct commit head form
const COMMIT_REGEX: &str = r"^commit: (.+)$";

/// Symbolic ref the head points at until the first commit
pub const DEFAULT_HEAD_REF: &str = "refs/heads/main";

/// Name of the head file
pub const HEAD_FILE_NAME: &str = "HEAD";

/// Head pointer manager
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository metadata directory (`.rift`)
    path: Box<Path>,
}

/// Parsed value of the head pointer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadState {
    /// Symbolic reference (initial state, before any commit)
    SymRef(String),
    /// Direct commit digest (after the first commit)
    Commit(ObjectId),
}

impl Refs {
    pub fn refs_path(&self) -> PathBuf {
        self.path.join("refs")
    }

    fn head_path(&self) -> PathBuf {
        self.path.join(HEAD_FILE_NAME)
    }

    pub fn read_head(&self) -> anyhow::Result<Option<HeadState>> {
        let head_path = self.head_path();
        if !head_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&head_path)
            .context(format!("Unable to read head file {}", head_path.display()))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        if let Some(symref_match) = regex::Regex::new(SYMREF_REGEX)?.captures(content) {
            return Ok(Some(HeadState::SymRef(symref_match[1].to_string())));
        }

        if let Some(commit_match) = regex::Regex::new(COMMIT_REGEX)?.captures(content) {
            return Ok(Some(HeadState::Commit(ObjectId::try_parse(
                commit_match[1].to_string(),
            )?)));
        }

        Err(anyhow::anyhow!("Unrecognized head value: {content}"))
    }

    /// Reset the head pointer to the default symbolic ref.
    pub fn set_default_head(&self) -> anyhow::Result<()> {
        let head_path = self.head_path();

        std::fs::write(&head_path, format!("ref: {DEFAULT_HEAD_REF}\n"))
            .context(format!("Unable to write head file {}", head_path.display()))
    }

    /// Point the head directly at a commit digest.
    pub fn update_head(&self, object_id: &ObjectId) -> anyhow::Result<()> {
        let head_path = self.head_path();

        std::fs::write(&head_path, format!("commit: {object_id}\n"))
            .context(format!("Unable to write head file {}", head_path.display()))
    }
}
