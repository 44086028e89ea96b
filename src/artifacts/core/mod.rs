//! Core utilities and shared types
//!
//! This module contains helpers shared by the object decoders.

pub mod scan;
