//! Packed 16-bit flags word of an index entry
//!
//! ```text
//! bits 14-15   assume-valid / extended (surfaced raw, not interpreted)
//! bits 12-13   merge stage number
//! bits  0-11   pathname byte length
//! ```

/// Flags word as read from disk. Any value is accepted; the parser only
/// depends on the stage number and the pathname length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flags(u16);

impl Flags {
    /// Merge stage (0 for a normally staged file, 1-3 during conflicts).
    pub fn stage_number(&self) -> u8 {
        ((self.0 >> 12) & 0b11) as u8
    }

    /// Byte length of the pathname that follows the fixed entry prefix.
    pub fn pathname_size(&self) -> usize {
        (self.0 & 0xFFF) as usize
    }

    /// The whole word, for the debug listing.
    pub fn raw(&self) -> u16 {
        self.0
    }
}

impl From<u16> for Flags {
    fn from(flags: u16) -> Self {
        Flags(flags)
    }
}
