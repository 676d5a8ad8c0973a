//! Object identities and payload decoding
//!
//! Objects are identified by SHA-1 hashes and framed on disk as
//! `<kind> <size>\0<payload>`. This module holds the id newtype, the
//! free-form kind tag and the tree payload decoder; the codec itself
//! lives in the database area.

pub mod object_id;
pub mod object_kind;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of a SHA-1 hash in raw bytes, as stored inside tree entries
/// and index entries
pub const OBJECT_NAME_SIZE: usize = 20;
