//! # Program word stream
//!
//! A program is a flat sequence of words with no header. Each instruction is
//! its opcode followed by `arity` operands; the final instruction may be
//! short when its operands ran out.
//!
//! Binary format:
//! ```text
//! Offset  Size  Field
//! ──────────────────────────────
//! 0x00    4     word 0 (native endian i32)
//! 0x04    4     word 1
//! ...     ...   ...
//! ```
//! Consumers derive the word count from the byte length.

use std::fmt;

use crate::error::{IsaError, Result};
use crate::{Word, WORD_SIZE};

/// Encoded program
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Program {
    words: Vec<Word>,
}

impl Program {
    /// Create an empty program
    pub fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Create an empty program with room for `capacity` words
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            words: Vec::with_capacity(capacity),
        }
    }

    /// Append one word
    #[inline]
    pub fn push(&mut self, word: Word) {
        self.words.push(word);
    }

    /// The words, in order
    #[inline]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Encoded size in bytes
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.words.len() * WORD_SIZE
    }

    /// Serialize to the raw artifact bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.byte_len());
        for &word in &self.words {
            bytes.extend_from_slice(&word.to_ne_bytes());
        }
        bytes
    }

    /// Deserialize from raw artifact bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() % WORD_SIZE != 0 {
            return Err(IsaError::TruncatedWord {
                len: bytes.len(),
                word_size: WORD_SIZE,
            });
        }

        let words = bytes
            .chunks_exact(WORD_SIZE)
            .map(|chunk| Word::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();
        Ok(Self { words })
    }
}

impl From<Vec<Word>> for Program {
    fn from(words: Vec<Word>) -> Self {
        Self { words }
    }
}

impl FromIterator<Word> for Program {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

impl Extend<Word> for Program {
    fn extend<I: IntoIterator<Item = Word>>(&mut self, iter: I) {
        self.words.extend(iter);
    }
}

impl AsRef<[Word]> for Program {
    fn as_ref(&self) -> &[Word] {
        &self.words
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", word)?;
        }
        write!(f, "]")
    }
}
