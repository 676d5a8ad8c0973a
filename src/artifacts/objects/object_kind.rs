//! Object kind tag from the framing header
//!
//! The frame header names the kind as a short free-form string ("blob",
//! "tree", "commit", "tag", ...). The codec never checks it against a
//! closed set: whatever kind was written is hashed, stored and read back
//! untouched. Only the tree walker cares about two specific values.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectKind(String);

impl ObjectKind {
    pub fn new(kind: impl Into<String>) -> Self {
        ObjectKind(kind.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_tree(&self) -> bool {
        self.0 == "tree"
    }

    pub fn is_commit(&self) -> bool {
        self.0 == "commit"
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
