//! Error types for reading the object store
//!
//! Every failure is fatal: the walker stops at the first error and the
//! binary exits non-zero. Lines printed before the failure stay printed.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving refs and decoding loose objects.
#[derive(Debug, Error)]
pub enum ObjectTreeError {
    /// The branch reference file does not exist.
    #[error("ref: {} does not exist", .0.display())]
    RefNotFound(PathBuf),

    /// No loose object file exists for the identifier.
    #[error("object {oid} not found at {}", .path.display())]
    ObjectNotFound { oid: String, path: PathBuf },

    /// The object file could not be inflated or its envelope is unreadable.
    #[error("corrupt object {oid}: {reason}")]
    CorruptObject { oid: String, reason: String },

    /// The envelope's declared size differs from the body length.
    #[error("size mismatch for object {oid}: header declares {declared}, body has {actual}")]
    SizeMismatch {
        oid: String,
        /// Size text exactly as written in the header
        declared: String,
        actual: usize,
    },

    /// A tree entry is truncated or missing a delimiter.
    #[error("malformed tree: {0}")]
    MalformedTree(String),

    /// The first commit header line is not `tree <oid>`.
    #[error("unexpected commit header: {0}")]
    UnexpectedCommitHeader(String),

    /// Text that should be a 40-character hex identifier is not one.
    #[error("invalid object ID: {0}")]
    InvalidObjectId(String),

    /// The SHA-1 of the inflated content does not match its identifier.
    #[error("checksum mismatch for object {expected}: content hashes to {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ObjectTreeError>;
