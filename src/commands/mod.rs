//! Command implementations
//!
//! - `plumbing`: Low-level commands reading the object store directly

pub mod plumbing;
