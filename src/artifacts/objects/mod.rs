//! Git object types and operations
//!
//! Every loose object shares the envelope `<kind> <size>\0<body>`. The body
//! is interpreted according to the kind:
//!
//! - **Commit**: text headers; only the leading `tree <oid>` line is read here
//! - **Tree**: repeated `<mode> <name>\0<20-byte-oid>` entries
//! - **Blob**: raw file content, never inspected
//! - **Tag**: printed but not followed

pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of a SHA-1 hash in binary format, as stored in tree entries
pub const RAW_OBJECT_ID_LENGTH: usize = OBJECT_ID_LENGTH / 2;
