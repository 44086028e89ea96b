//! Git data structures
//!
//! - `core`: Bounds-checked byte scanning shared by the decoders
//! - `objects`: Object envelope, identifiers, and the commit and tree decoders

pub mod core;
pub mod objects;
