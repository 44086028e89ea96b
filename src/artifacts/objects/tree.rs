//! Git tree object
//!
//! Trees represent directory snapshots. They list files (blobs) and
//! subdirectories (other trees) by name, mode and object ID.
//!
//! ## Format
//!
//! Body: repeated `<mode> <name>\0<20-byte-sha1>` entries.
//!
//! Entries are kept in the order they appear on disk. Writers sort them by
//! name, but nothing here re-sorts.

use crate::artifacts::core::scan::{is_exhausted, read_delimited, read_fixed};
use crate::artifacts::objects::RAW_OBJECT_ID_LENGTH;
use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{ObjectTreeError, Result};
use bytes::Bytes;
use derive_new::new;
use std::io::{BufRead, Write};

/// A single `<mode> <name> <oid>` record of a tree
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TreeEntry {
    /// Octal permission text such as `100644` or `40000`
    pub mode: String,
    pub name: String,
    pub oid: ObjectId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, new)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    pub fn entries(&self) -> impl Iterator<Item = &TreeEntry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> impl Iterator<Item = TreeEntry> {
        self.entries.into_iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Packable for Tree {
    fn serialize(&self) -> Result<Bytes> {
        let mut tree_bytes = Vec::new();

        for entry in &self.entries {
            let header = format!("{} {}", entry.mode, entry.name);
            tree_bytes.write_all(header.as_bytes())?;
            tree_bytes.push(0);
            entry.oid.write_h40_to(&mut tree_bytes)?;
        }

        Ok(Bytes::from(tree_bytes))
    }
}

impl Unpackable for Tree {
    fn deserialize(reader: impl BufRead) -> Result<Self> {
        let mut entries = Vec::new();
        let mut reader = reader;

        while !is_exhausted(&mut reader)? {
            let mode = read_delimited(&mut reader, b' ')?.ok_or_else(|| {
                ObjectTreeError::MalformedTree(format!(
                    "unexpected end of tree in mode of entry {}",
                    entries.len()
                ))
            })?;
            if mode.is_empty() || !mode.iter().all(|b| (b'0'..=b'7').contains(b)) {
                return Err(ObjectTreeError::MalformedTree(format!(
                    "mode of entry {} is not an octal number: {:?}",
                    entries.len(),
                    String::from_utf8_lossy(&mode)
                )));
            }
            let mode = String::from_utf8_lossy(&mode).into_owned();

            let name = read_delimited(&mut reader, b'\0')?.ok_or_else(|| {
                ObjectTreeError::MalformedTree(format!(
                    "unexpected end of tree in name of entry {}",
                    entries.len()
                ))
            })?;
            let name = String::from_utf8(name).map_err(|_| {
                ObjectTreeError::MalformedTree(format!(
                    "name of entry {} is not valid UTF-8",
                    entries.len()
                ))
            })?;

            let raw_oid = read_fixed::<RAW_OBJECT_ID_LENGTH>(&mut reader)?.ok_or_else(|| {
                ObjectTreeError::MalformedTree(format!(
                    "unexpected end of tree in object id of {name}"
                ))
            })?;

            entries.push(TreeEntry::new(mode, name, ObjectId::from_raw(&raw_oid)));
        }

        Ok(Tree { entries })
    }
}
