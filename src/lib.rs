//! Read-only inspector for a repository's loose object store.
//!
//! Starting from a branch head, the walker prints every object reachable
//! from the head commit's root tree, one line per object, annotated with
//! its kind, identifier and size.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
