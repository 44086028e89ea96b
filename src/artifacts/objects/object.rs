use crate::artifacts::core::scan::read_delimited;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{ObjectTreeError, Result};
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::io::{BufRead, Cursor, Write};

pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_id(&self) -> Result<ObjectId> {
        let content = self.serialize()?;
        let mut hasher = Sha1::new();
        hasher.update(&content);

        let oid = hasher.finalize();
        ObjectId::try_parse(format!("{oid:x}"))
    }
}

/// A decoded loose object: `<kind> <size>\0<body>`
///
/// `declared_size` always equals `body.len()`; `parse` refuses anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitObject {
    kind: ObjectType,
    declared_size: usize,
    body: Bytes,
}

impl GitObject {
    /// Wrap a body in an envelope whose size matches it
    pub fn new(kind: ObjectType, body: Bytes) -> Self {
        GitObject {
            kind,
            declared_size: body.len(),
            body,
        }
    }

    /// Decode the envelope of an inflated object
    ///
    /// The kind runs up to the first space, the size from there up to the
    /// first NUL. Kinds are not validated; unrecognised ones decode as
    /// `ObjectType::Unknown`.
    pub fn parse(oid: &ObjectId, content: Bytes) -> Result<Self> {
        let corrupt = |reason: &str| ObjectTreeError::CorruptObject {
            oid: oid.to_string(),
            reason: reason.to_string(),
        };
        let mut reader = Cursor::new(&content[..]);

        let kind = read_delimited(&mut reader, b' ')?
            .ok_or_else(|| corrupt("missing space after object kind"))?;
        let kind = String::from_utf8(kind).map_err(|_| corrupt("object kind is not text"))?;

        let size = read_delimited(&mut reader, b'\0')?
            .ok_or_else(|| corrupt("missing NUL after object size"))?;
        let size = std::str::from_utf8(&size)
            .ok()
            .filter(|size| !size.is_empty() && size.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(|| corrupt("object size is not a decimal number"))?;

        let body_start = reader.position() as usize;
        let body = content.slice(body_start..);

        // a size too large for usize cannot match any body either
        let declared_size = size
            .parse::<usize>()
            .ok()
            .filter(|declared_size| *declared_size == body.len())
            .ok_or_else(|| ObjectTreeError::SizeMismatch {
                oid: oid.to_string(),
                declared: size.to_string(),
                actual: body.len(),
            })?;

        Ok(GitObject {
            kind: ObjectType::from(kind.as_str()),
            declared_size,
            body,
        })
    }

    pub fn kind(&self) -> &ObjectType {
        &self.kind
    }

    pub fn declared_size(&self) -> usize {
        self.declared_size
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// A reader over the body, for the kind-specific decoders
    pub fn body_reader(&self) -> Cursor<&[u8]> {
        Cursor::new(&self.body[..])
    }
}

impl Packable for GitObject {
    fn serialize(&self) -> Result<Bytes> {
        let mut object_bytes = Vec::new();
        let header = format!("{} {}\0", self.kind.as_str(), self.declared_size);
        object_bytes.write_all(header.as_bytes())?;
        object_bytes.write_all(&self.body)?;

        Ok(Bytes::from(object_bytes))
    }
}

impl Object for GitObject {}
