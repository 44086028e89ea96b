//! Git commit object
//!
//! A commit body starts with `key value` header lines, then a blank line and
//! the message:
//!
//! ```text
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <email> <timestamp> <timezone>
//! committer <name> <email> <timestamp> <timezone>
//!
//! <commit message>
//! ```
//!
//! Only the leading `tree` line matters for walking; parents, identities and
//! the message are never read.

use crate::artifacts::core::scan::{read_delimited, read_fixed};
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{ObjectTreeError, Result};
use std::io::BufRead;

const TREE_HEADER_KEY: &[u8] = b"tree";

/// The part of a commit header needed to reach its snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitHeader {
    tree_oid: ObjectId,
}

impl CommitHeader {
    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }
}

impl Unpackable for CommitHeader {
    fn deserialize(reader: impl BufRead) -> Result<Self> {
        let mut reader = reader;

        let key = read_delimited(&mut reader, b' ')?.ok_or_else(|| {
            ObjectTreeError::UnexpectedCommitHeader("missing space in first header line".into())
        })?;
        if key != TREE_HEADER_KEY {
            return Err(ObjectTreeError::UnexpectedCommitHeader(format!(
                "first header line starts with {:?}, expected \"tree\"",
                String::from_utf8_lossy(&key)
            )));
        }

        let tree_oid = read_fixed::<OBJECT_ID_LENGTH>(&mut reader)?.ok_or_else(|| {
            ObjectTreeError::UnexpectedCommitHeader(
                "tree header is shorter than an object id".into(),
            )
        })?;
        let tree_oid = String::from_utf8_lossy(&tree_oid).into_owned();

        Ok(CommitHeader {
            tree_oid: ObjectId::try_parse(tree_oid)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const TREE: &str = "64c5e5885a4b06010b3a0c20edb7900dd0311025";

    #[test]
    fn reads_tree_from_first_line() {
        let body = format!(
            "tree {TREE}\nparent 43dd47ea691c90a5fa7827892c70241913351963\nauthor a <a@b.c> 0 +0000\n\nmsg\n"
        );
        let header = CommitHeader::deserialize(Cursor::new(body.as_bytes())).unwrap();

        assert_eq!(header.tree_oid().as_ref(), TREE);
    }

    #[test]
    fn other_first_key_is_unexpected() {
        let body = format!("parent {TREE}\ntree {TREE}\n");
        let result = CommitHeader::deserialize(Cursor::new(body.as_bytes()));

        assert!(matches!(
            result,
            Err(ObjectTreeError::UnexpectedCommitHeader(_))
        ));
    }

    #[test]
    fn first_line_without_space_is_unexpected() {
        let result = CommitHeader::deserialize(Cursor::new(&b"tree"[..]));
        assert!(matches!(
            result,
            Err(ObjectTreeError::UnexpectedCommitHeader(_))
        ));
    }

    #[test]
    fn short_tree_id_is_unexpected() {
        let result = CommitHeader::deserialize(Cursor::new(&b"tree 64c5e588\n"[..]));
        assert!(matches!(
            result,
            Err(ObjectTreeError::UnexpectedCommitHeader(_))
        ));
    }
}
