//! Rift blob object
//!
//! Blobs store file content. They contain only the raw file bytes, without
//! any metadata like filename or permissions.
//!
//! On disk a blob is its content, verbatim; the digest alone identifies it.

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use bytes::Bytes;
use derive_new::new;
use std::io::BufRead;

/// Rift blob object representing file content
///
/// Each unique file content is stored as one blob, identified by its
/// SHA-256 digest.
#[derive(Debug, Clone, new)]
pub struct Blob {
    /// Raw file content
    content: Bytes,
}

impl Blob {
    pub fn content(&self) -> &Bytes {
        &self.content
    }
}

impl Packable for Blob {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        Ok(self.content.clone())
    }
}

impl Unpackable for Blob {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let content = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;

        Ok(Self::new(Bytes::from(content)))
    }
}

impl Object for Blob {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::objects::OBJECT_ID_LENGTH;

    #[test]
    fn equal_content_yields_equal_digest() {
        let first = Blob::new(Bytes::from_static(b"hello rift"));
        let second = Blob::new(Bytes::from_static(b"hello rift"));

        assert_eq!(
            first.object_id().unwrap(),
            second.object_id().unwrap()
        );
    }

    #[test]
    fn different_content_yields_different_digest() {
        let first = Blob::new(Bytes::from_static(b"hello rift"));
        let second = Blob::new(Bytes::from_static(b"hello drift"));

        assert_ne!(
            first.object_id().unwrap(),
            second.object_id().unwrap()
        );
    }

    #[test]
    fn digest_is_lowercase_hex_of_expected_length() {
        let blob = Blob::new(Bytes::from_static(b"content"));
        let oid = blob.object_id().unwrap();

        assert_eq!(oid.as_ref().len(), OBJECT_ID_LENGTH);
        assert!(
            oid.as_ref()
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
        );
    }

    #[test]
    fn serialization_is_the_raw_content() {
        let blob = Blob::new(Bytes::from_static(b"raw bytes"));

        assert_eq!(blob.serialize().unwrap(), Bytes::from_static(b"raw bytes"));
    }
}
