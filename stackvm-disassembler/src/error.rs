//! Disassembler errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DisassemblerError {
    #[error("Unknown opcode {word} at word {offset}")]
    UnknownOpcode { offset: usize, word: i32 },
}

pub type Result<T> = std::result::Result<T, DisassemblerError>;
