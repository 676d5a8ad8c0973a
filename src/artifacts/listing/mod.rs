//! Presentation helpers for the index listings
//!
//! - `pattern`: `--format` placeholder interpolation
//! - `debug_info`: the per-entry cache metadata block of `--debug`

pub mod debug_info;
pub mod pattern;
