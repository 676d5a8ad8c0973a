//! Packed 32-bit file mode of an index entry
//!
//! ```text
//! bits 16-31   unused, must be zero
//! bits 12-15   object type (0b1000 file, 0b1010 symlink, 0b1110 gitlink)
//! bits  9-11   unused, must be zero
//! bits  0-8    POSIX permission bits
//! ```
//!
//! Nonzero reserved bits mean a format this parser does not understand,
//! or corruption; either way parsing stops there.

use anyhow::anyhow;

/// Object type code stored by sparse-index tree entries
const OBJECT_TYPE_TREE: u8 = 0b0100;

/// Object type code for a gitlink (submodule) entry
const OBJECT_TYPE_GITLINK: u8 = 0b1110;

/// Validated mode word. The raw value is kept; accessors expose the
/// packed ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mode(u32);

impl Mode {
    pub fn try_parse(mode: u32) -> anyhow::Result<Self> {
        if mode >> 16 != 0 {
            return Err(anyhow!(
                "index entry mode {mode:o} has nonzero reserved bits 16-31"
            ));
        }
        if (mode >> 9) & 0b111 != 0 {
            return Err(anyhow!(
                "index entry mode {mode:o} has nonzero reserved bits 9-11"
            ));
        }

        Ok(Mode(mode))
    }

    /// The 4-bit object type code.
    pub fn object_type(&self) -> u8 {
        ((self.0 >> 12) & 0b1111) as u8
    }

    /// Kind of the staged object, as printed by `%(objecttype)`. Symlinks
    /// hash as blobs and report as such.
    pub fn object_type_name(&self) -> &'static str {
        match self.object_type() {
            OBJECT_TYPE_TREE => "tree",
            OBJECT_TYPE_GITLINK => "commit",
            _ => "blob",
        }
    }

    /// The low nine permission bits (0o644 or 0o755 for regular files;
    /// zero for symlinks and gitlinks).
    pub fn permissions(&self) -> u16 {
        (self.0 & 0o777) as u16
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

/// Modes render in octal, the only textual form the listings use.
impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:o}", self.0)
    }
}
