//! Repository data structures and codecs
//!
//! This module contains the value types the areas are built from:
//!
//! - `index`: staging index binary format (header, entries, packed fields)
//! - `listing`: presentation helpers for `ls-files` (format patterns, debug blocks)
//! - `objects`: object ids, kind tags and tree decoding
//! - `status`: working tree inspection against the index
//! - `stream`: binary stream reader the parsers are written against

pub mod index;
pub mod listing;
pub mod objects;
pub mod status;
pub mod stream;
