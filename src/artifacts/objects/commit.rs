//! Rift commit object
//!
//! Commits snapshot the staging index at a point in time. They contain the
//! commit message, a timezone-aware timestamp, and the list of staged paths.
//!
//! ## Format
//!
//! On disk:
//! ```text
//! message: <message>
//! timestamp: <RFC 3339>
//! files:
//!   <path>
//!   <path>
//! ```
//!
//! The file list is sorted before serialization, so the serialized form is
//! a pure function of (message, timestamp, file set) and the same logical
//! commit always hashes identically for a given timestamp. The digest is
//! derived from this content and is never stored inside it.

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use anyhow::Context;
use bytes::Bytes;
use std::io::BufRead;
use std::path::PathBuf;

/// Rift commit object
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Commit message
    message: String,
    /// Commit timestamp with timezone
    timestamp: chrono::DateTime<chrono::FixedOffset>,
    /// Paths staged at commit time
    files: Vec<PathBuf>,
}

impl Commit {
    pub fn new(
        message: String,
        timestamp: chrono::DateTime<chrono::FixedOffset>,
        mut files: Vec<PathBuf>,
    ) -> Self {
        files.sort();

        Commit {
            message,
            timestamp,
            files,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> chrono::DateTime<chrono::FixedOffset> {
        self.timestamp
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut object_content = vec![];

        object_content.push(format!("message: {}", self.message));
        object_content.push(format!("timestamp: {}", self.timestamp.to_rfc3339()));
        object_content.push(String::from("files:"));
        for file in &self.files {
            object_content.push(format!("  {}", file.display()));
        }

        let object_content = object_content.join("\n") + "\n";

        Ok(Bytes::from(object_content))
    }
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let content = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;

        let content = String::from_utf8(content)?;
        let mut lines = content.lines();

        let message = lines
            .next()
            .context("Invalid commit object: missing message line")?
            .strip_prefix("message: ")
            .context("Invalid commit object: invalid message line")?
            .to_string();

        let timestamp = lines
            .next()
            .context("Invalid commit object: missing timestamp line")?
            .strip_prefix("timestamp: ")
            .context("Invalid commit object: invalid timestamp line")?;
        let timestamp = chrono::DateTime::parse_from_rfc3339(timestamp)
            .context("Invalid commit object: unparseable timestamp")?;

        let files_marker = lines
            .next()
            .context("Invalid commit object: missing files line")?;
        if files_marker != "files:" {
            anyhow::bail!("Invalid commit object: invalid files line");
        }

        let files = lines
            .map(|line| PathBuf::from(line.trim_start()))
            .collect::<Vec<_>>();

        Ok(Self::new(message, timestamp, files))
    }
}

impl Object for Commit {}
