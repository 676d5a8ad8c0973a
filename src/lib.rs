//! A minimal read/write engine for a git-style object repository
//!
//! The crate is split the same way the on-disk repository is:
//!
//! - `areas`: the stateful places commands read from and write to
//!   (object database, staging index, working tree), wired together
//!   by `Repository`
//! - `artifacts`: the value types and codecs those areas are made of
//!   (binary stream reader, object ids and kinds, tree decoding,
//!   packed index fields, listing helpers)
//! - `commands`: one plumbing command per module, implemented on
//!   `Repository`

pub mod areas;
pub mod artifacts;
pub mod commands;
