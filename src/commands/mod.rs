//! Plumbing command implementations
//!
//! Each command is an `impl Repository` block in its own module. The CLI
//! parses arguments into plain values and option structs; the methods
//! here read through the repository areas and write their lines to the
//! repository's writer.
//!
//! ## Commands
//!
//! - `cat-file`: print a stored object's payload, kind or declared size
//! - `checkout-index`: copy staged blobs into the working tree
//! - `hash-object`: compute object IDs and optionally store the objects
//! - `ls-files`: list index entries (cached, stage, deleted, modified, others)
//! - `ls-tree`: list a tree object, optionally recursing into sub-trees
//! - `mktag`: store a tag object read from standard input

pub mod cat_file;
pub mod checkout_index;
pub mod hash_object;
pub mod ls_files;
pub mod ls_tree;
pub mod mk_tag;
