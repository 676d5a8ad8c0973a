//! Working tree inspection against the staging index

pub mod inspector;
