//! Branch references
//!
//! A branch ref is a text file under `.git/refs/heads/` holding the
//! 40-character SHA-1 of the branch tip followed by a line terminator.
//!
//! Only direct refs are read: `ref: <path>` indirection and
//! `.git/packed-refs` are not consulted.

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{ObjectTreeError, Result};
use derive_new::new;
use std::path::{Path, PathBuf};

/// Branch whose tip is walked when none is given
pub const DEFAULT_BRANCH: &str = "master";

/// Reference reader rooted at the `.git` directory
#[derive(Debug, new)]
pub struct Refs {
    path: Box<Path>,
}

impl Refs {
    /// Path of the ref file for `branch`, e.g. `.git/refs/heads/master`
    pub fn branch_ref_path(&self, branch: &str) -> PathBuf {
        self.path.join("refs").join("heads").join(branch)
    }

    /// Read the commit ID a branch points to
    ///
    /// Exactly one trailing `\n` (or `\r\n`) is stripped; whatever remains
    /// must be a full object ID.
    pub fn read_branch_head(&self, branch: &str) -> Result<ObjectId> {
        let ref_path = self.branch_ref_path(branch);

        let content = match std::fs::read(&ref_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ObjectTreeError::RefNotFound(ref_path));
            }
            Err(e) => return Err(e.into()),
        };

        let oid = String::from_utf8_lossy(strip_line_terminator(&content)).into_owned();
        tracing::debug!(branch, oid = %oid, "resolved branch head");

        ObjectId::try_parse(oid)
    }
}

fn strip_line_terminator(content: &[u8]) -> &[u8] {
    match content.strip_suffix(b"\n") {
        Some(line) => line.strip_suffix(b"\r").unwrap_or(line),
        None => content,
    }
}
