use core::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::InvalidResidue;

/// A single alignment symbol.
///
/// `Residue` is a compact, Copyable representation of one symbol of a protein
/// or nucleotide alphabet, backed by its uppercase ASCII byte. The byte `-` is
/// reserved for the alignment gap. Ordering follows the byte value, which is
/// what canonical residue pairs sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Residue(u8);

impl Residue {
    /// The alignment gap symbol.
    pub const GAP: Residue = Residue(b'-');

    /// Convert from an ASCII byte. Lowercase letters are upper-cased.
    /// Returns `None` for whitespace, control and non-ASCII bytes.
    #[inline]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        if byte.is_ascii_graphic() {
            Some(Self(byte.to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// Convert to the uppercase ASCII byte.
    #[inline(always)]
    pub const fn to_ascii(self) -> u8 {
        self.0
    }

    /// Convert to a `char`.
    #[inline(always)]
    pub const fn to_char(self) -> char {
        self.0 as char
    }

    /// Return true for the gap symbol.
    #[inline(always)]
    pub const fn is_gap(self) -> bool {
        self.0 == b'-'
    }
}

impl TryFrom<u8> for Residue {
    type Error = InvalidResidue;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_ascii(byte).ok_or(InvalidResidue(byte))
    }
}

impl TryFrom<char> for Residue {
    type Error = InvalidResidue;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        u8::try_from(c)
            .ok()
            .and_then(Self::from_ascii)
            .ok_or(InvalidResidue(c as u32 as u8))
    }
}

impl From<Residue> for char {
    #[inline(always)]
    fn from(residue: Residue) -> char {
        residue.to_char()
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
