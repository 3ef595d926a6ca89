//! Rift object types and operations
//!
//! Rift stores all content as objects identified by SHA-256 digests. There
//! are two types:
//!
//! - **Blob**: File content (raw bytes)
//! - **Commit**: Snapshot with metadata (message, timestamp, file list)
//!
//! Blobs are persisted verbatim; commits use a deterministic textual
//! serialization. An object's digest is always the hash of its serialized
//! content, so equal content means equal digest and a single stored copy.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;

/// Length of a SHA-256 digest in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 64;

/// Digest prefix length used in human-facing output
pub const SHORT_OID_LENGTH: usize = 8;
