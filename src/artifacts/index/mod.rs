//! Staging index file format (read side)
//!
//! The index tracks the staged state of every path in the repository.
//! This module holds the binary layout; the parser that drives it lives
//! in the index area.
//!
//! ## File Format (Version 2)
//!
//! ```text
//! Header (12 bytes):
//!   - Signature: 4-byte magic tag ("DIRC" in files written by git)
//!   - Version (4 bytes)
//!   - Entry count (4 bytes)
//!
//! Entries (variable length):
//!   - 62 fixed bytes, then the pathname, a NUL, and zero padding up to
//!     the next 8-byte boundary measured from the entry's start
//!
//! Extensions and a trailing checksum follow the last entry; the parser
//! leaves them unread.
//! ```

pub mod flags;
pub mod index_entry;
pub mod index_header;
pub mod mode;

/// Fixed byte length of an entry before its pathname: ten 32-bit stat
/// fields, the 20-byte object name and the 16-bit flags word
pub const ENTRY_FIXED_SIZE: usize = 62;

/// Entries are padded to multiples of this, measured from entry start
pub const ENTRY_BLOCK: usize = 8;
