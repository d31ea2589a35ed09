//! Instruction decoder

use stackvm_spec::{Opcode, Word};

use crate::error::{DisassemblerError, Result};

/// One instruction recovered from a word stream
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedInstruction {
    /// Word offset of the opcode
    pub offset: usize,
    pub opcode: Opcode,
    /// Operands actually present
    pub operands: Vec<Word>,
    /// Operands the stream ended before supplying
    pub missing: usize,
}

impl DecodedInstruction {
    /// Whether the stream ended inside this instruction
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.missing > 0
    }

    /// Words this instruction occupies in the stream
    #[inline]
    pub fn width(&self) -> usize {
        1 + self.operands.len()
    }
}

/// Decode a word stream into instructions
pub fn decode(words: &[Word]) -> Result<Vec<DecodedInstruction>> {
    let mut decoded = Vec::new();
    let mut offset = 0;

    while offset < words.len() {
        let word = words[offset];
        let opcode = Opcode::from_word(word)
            .ok_or(DisassemblerError::UnknownOpcode { offset, word })?;

        let start = offset + 1;
        let end = (start + opcode.arity()).min(words.len());
        let operands = words[start..end].to_vec();
        let missing = opcode.arity() - operands.len();

        decoded.push(DecodedInstruction {
            offset,
            opcode,
            operands,
            missing,
        });
        offset = end;
    }

    Ok(decoded)
}
