//! Core repository components
//!
//! This module contains the stateful areas a repository is made of:
//!
//! - `database`: loose-object database (hash, store, load, prefix lookup)
//! - `index`: staging area parser (read side only)
//! - `repository`: high-level coordination and output wiring
//! - `workspace`: working directory file system operations

pub(crate) mod database;
pub(crate) mod index;
pub mod repository;
pub(crate) mod workspace;
