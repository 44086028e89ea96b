use crate::artifacts::objects::object::{GitObject, Object};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{ObjectTreeError, Result};
use bytes::Bytes;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Read-only view over the loose objects under `.git/objects`
///
/// Nothing is cached: every lookup reads and inflates the file again.
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
    verify_checksums: bool,
}

// TODO: read packfiles so objects that were gc'ed out of the loose store are found
impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database {
            path,
            verify_checksums: false,
        }
    }

    /// Re-hash every object after inflating it and reject mismatches
    pub fn with_checksum_verification(mut self, verify_checksums: bool) -> Self {
        self.verify_checksums = verify_checksums;
        self
    }

    /// Inflated content of an object, envelope included
    pub fn load(&self, object_id: &ObjectId) -> Result<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        self.read_object(object_id, object_path)
    }

    pub fn parse_object(&self, object_id: &ObjectId) -> Result<GitObject> {
        let object_content = self.load(object_id)?;
        let object = GitObject::parse(object_id, object_content)?;

        if self.verify_checksums {
            let actual = object.object_id()?;
            if &actual != object_id {
                return Err(ObjectTreeError::ChecksumMismatch {
                    expected: object_id.to_string(),
                    actual: actual.to_string(),
                });
            }
        }

        tracing::debug!(
            oid = %object_id,
            kind = %object.kind(),
            size = object.declared_size(),
            "parsed object"
        );

        Ok(object)
    }

    fn read_object(&self, object_id: &ObjectId, object_path: PathBuf) -> Result<Bytes> {
        let object_content = match std::fs::read(&object_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ObjectTreeError::ObjectNotFound {
                    oid: object_id.to_string(),
                    path: object_path,
                });
            }
            Err(e) => return Err(e.into()),
        };

        Self::decompress(object_content.into()).map_err(|e| ObjectTreeError::CorruptObject {
            oid: object_id.to_string(),
            reason: format!("unable to decompress object content: {e}"),
        })
    }

    fn decompress(data: Bytes) -> std::io::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder.read_to_end(&mut decompressed_content)?;

        Ok(decompressed_content.into())
    }
}
