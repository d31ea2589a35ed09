//! # Instruction descriptors
//!
//! An [`InstructionSpec`] ties a mnemonic to its opcode and operand count.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{IsaError, Result};
use crate::opcode::Opcode;
use crate::MAX_MNEMONIC_LEN;

/// Bounded instruction name: 1 to 7 visible ASCII characters, stored inline.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mnemonic {
    bytes: [u8; MAX_MNEMONIC_LEN],
    len: u8,
}

impl Mnemonic {
    /// Validate and build a mnemonic.
    ///
    /// Names that are empty, longer than [`MAX_MNEMONIC_LEN`], or contain
    /// anything other than visible ASCII are rejected rather than truncated.
    pub fn new(name: &str) -> Result<Self> {
        let raw = name.as_bytes();
        if raw.is_empty()
            || raw.len() > MAX_MNEMONIC_LEN
            || !raw.iter().all(|b| b.is_ascii_graphic())
        {
            return Err(IsaError::InvalidMnemonic {
                name: name.to_string(),
                max: MAX_MNEMONIC_LEN,
            });
        }

        let mut bytes = [0u8; MAX_MNEMONIC_LEN];
        bytes[..raw.len()].copy_from_slice(raw);
        Ok(Self {
            bytes,
            len: raw.len() as u8,
        })
    }

    /// View as a string slice
    pub fn as_str(&self) -> &str {
        // Only ASCII is ever stored
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or_default()
    }

    /// Length in characters
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Ord for Mnemonic {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for Mnemonic {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl TryFrom<&str> for Mnemonic {
    type Error = IsaError;

    fn try_from(name: &str) -> Result<Self> {
        Self::new(name)
    }
}

impl AsRef<str> for Mnemonic {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mnemonic({:?})", self.as_str())
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the instruction table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InstructionSpec {
    /// Source-level name
    pub mnemonic: Mnemonic,
    /// Encoded opcode word
    pub opcode: Opcode,
    /// Number of operand words following the opcode
    pub arity: usize,
}

impl InstructionSpec {
    /// Build the descriptor for an opcode
    pub fn for_opcode(opcode: Opcode) -> Result<Self> {
        Ok(Self {
            mnemonic: Mnemonic::new(opcode.mnemonic())?,
            opcode,
            arity: opcode.arity(),
        })
    }

    /// Encoded width in words (opcode plus operands)
    #[inline]
    pub fn width(&self) -> usize {
        1 + self.arity
    }
}

impl fmt::Display for InstructionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (opcode {}, {} operands)", self.mnemonic, self.opcode.to_word(), self.arity)
    }
}
