//! Instruction formatting to assembly text

use crate::decoder::DecodedInstruction;

/// Format an instruction as assembly source
pub fn format(instr: &DecodedInstruction) -> String {
    let mut text = instr.opcode.mnemonic().to_string();
    for operand in &instr.operands {
        text.push(' ');
        text.push_str(&operand.to_string());
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use stackvm_spec::Opcode;

    fn instr(opcode: Opcode, operands: Vec<i32>) -> DecodedInstruction {
        let missing = opcode.arity() - operands.len();
        DecodedInstruction {
            offset: 0,
            opcode,
            operands,
            missing,
        }
    }

    #[test]
    fn test_format_no_operands() {
        assert_eq!(format(&instr(Opcode::Halt, vec![])), "halt");
    }

    #[test]
    fn test_format_operands() {
        assert_eq!(format(&instr(Opcode::Iconst, vec![-4])), "iconst -4");
        assert_eq!(format(&instr(Opcode::Call, vec![1, 2, 3])), "call 1 2 3");
    }

    #[test]
    fn test_format_truncated() {
        assert_eq!(format(&instr(Opcode::Call, vec![1])), "call 1");
    }
}
