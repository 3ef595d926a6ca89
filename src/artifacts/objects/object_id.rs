//! Rift object identifier (SHA-256 digest)
//!
//! Object IDs are 64-character lowercase hexadecimal strings representing
//! SHA-256 digests. They uniquely identify all objects in a repository
//! (blobs and commits).
//!
//! ## Storage
//!
//! Objects are stored in a flat namespace: `.rift/objects/<digest>`

use crate::artifacts::objects::{OBJECT_ID_LENGTH, SHORT_OID_LENGTH};
use std::path::PathBuf;

/// Rift object identifier (SHA-256 digest)
///
/// A 64-character hexadecimal string that uniquely identifies an object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// # Arguments
    ///
    /// * `id` - 64-character hexadecimal string
    ///
    /// # Returns
    ///
    /// Validated ObjectId or error if invalid length/characters
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != OBJECT_ID_LENGTH {
            return Err(anyhow::anyhow!("Invalid object ID length: {}", id.len()));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow::anyhow!("Invalid object ID characters: {}", id));
        }
        Ok(Self(id))
    }

    /// Convert to the file system path the object is stored under
    ///
    /// The namespace is flat: the digest itself is the file name.
    pub fn to_path(&self) -> PathBuf {
        PathBuf::from(&self.0)
    }

    /// Get abbreviated form of the object ID
    pub fn to_short_oid(&self) -> String {
        self.0.split_at(SHORT_OID_LENGTH).0.to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
