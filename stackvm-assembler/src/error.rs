//! Assembler errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssemblerError {
    #[error("Invalid Instruction \"{0}\"")]
    UnknownInstruction(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AssemblerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_instruction_display() {
        let err = AssemblerError::UnknownInstruction("bogus".to_string());
        assert_eq!(err.to_string(), "Invalid Instruction \"bogus\"");
    }

    #[test]
    fn test_io_error_converts() {
        let err: AssemblerError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.to_string(), "I/O error: gone");
    }
}
