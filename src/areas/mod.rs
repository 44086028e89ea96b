//! On-disk repository areas
//!
//! - `database`: Loose object store under `.git/objects`
//! - `refs`: Branch references under `.git/refs/heads`
//! - `repository`: Ties the areas to a root path and an output writer

pub mod database;
pub mod refs;
pub mod repository;
