//! Plumbing commands (low-level object store reads)
//!
//! ## Commands
//!
//! - `walk-objects`: List every object reachable from a branch tip

pub mod walk_objects;
