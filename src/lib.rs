//! rift — a minimal version-control backend
//!
//! A content-addressable object store paired with a staging index and an
//! ignore-pattern filter, used to snapshot a working directory into
//! immutable, hash-identified objects.

pub mod areas;
pub mod artifacts;
mod commands;
