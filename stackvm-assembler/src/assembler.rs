//! Main assembler logic

use std::path::Path;

use stackvm_spec::{lookup, Program};
use tracing::debug;

use crate::error::{AssemblerError, Result};
use crate::lexer::tokenize;
use crate::operand::parse_operand;

/// Assemble source code into a program
pub fn assemble(source: &str) -> Result<Program> {
    let tokens = tokenize(source);
    assemble_tokens(&tokens)
}

/// Assemble a source file into a program
pub fn assemble_file(path: impl AsRef<Path>) -> Result<Program> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    debug!(path = %path.display(), bytes = bytes.len(), "assembling file");
    assemble(&String::from_utf8_lossy(&bytes))
}

/// Resolve a token stream into a program
///
/// Each mnemonic is followed by up to `arity` operand tokens. When the
/// stream ends early the last instruction is left short; that is not an
/// error.
pub fn assemble_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Program> {
    let mut program = Program::with_capacity(tokens.len());
    let mut tokens = tokens.iter().map(AsRef::as_ref);

    while let Some(token) = tokens.next() {
        let spec = lookup(token)
            .ok_or_else(|| AssemblerError::UnknownInstruction(token.to_string()))?;

        program.push(spec.opcode.to_word());
        for operand in tokens.by_ref().take(spec.arity) {
            program.push(parse_operand(operand));
        }
    }

    debug!(words = program.len(), "assembled program");
    Ok(program)
}
