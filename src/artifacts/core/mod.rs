//! Shared error taxonomy
//!
//! Every fallible repository operation returns a typed failure from this
//! module rather than terminating the process. Errors are propagated through
//! `anyhow` and remain downcastable, so the command-dispatch layer alone
//! decides whether a failure aborts the run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RiftError {
    /// Filesystem failure, surfaced with the failing path. Never retried.
    #[error("io failure on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A referenced file or object is absent.
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Attempted to stage a path excluded by the ignore rules.
    #[error("path is ignored: {}", .0.display())]
    Ignored(PathBuf),

    /// Commit attempted with an empty staging index.
    #[error("nothing to commit")]
    NothingToCommit,

    /// The index file is present but a line does not parse.
    #[error("malformed index line: {0:?}")]
    MalformedIndex(String),
}
