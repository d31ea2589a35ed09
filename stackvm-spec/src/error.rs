//! # Error Types for the stackvm instruction set

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IsaError {
    #[error("Invalid mnemonic {name:?}: expected 1-{max} visible characters")]
    InvalidMnemonic { name: String, max: usize },

    #[error("Invalid opcode: {0}")]
    InvalidOpcode(i32),

    #[error("Truncated word: {len} bytes is not a multiple of {word_size}")]
    TruncatedWord { len: usize, word_size: usize },
}

pub type Result<T> = std::result::Result<T, IsaError>;
