//! Main disassembler logic

use stackvm_spec::Program;

use crate::decoder::decode;
use crate::error::Result;
use crate::formatter::format;

/// Disassemble a program into an annotated listing
pub fn disassemble(program: &Program) -> Result<String> {
    let decoded = decode(program.words())?;
    let mut output = String::new();

    output.push_str("; stackvm disassembly\n");
    output.push_str(&format!(
        "; {} words ({} bytes), {} instructions\n",
        program.len(),
        program.byte_len(),
        decoded.len()
    ));
    output.push('\n');

    for instr in &decoded {
        output.push_str(&format!("{:04}:  ", instr.offset));
        output.push_str(&format(instr));
        if instr.is_truncated() {
            output.push_str(&format!("  ; missing {} operand(s)", instr.missing));
        }
        output.push('\n');
    }

    Ok(output)
}

/// Disassemble a program into plain source the assembler accepts
pub fn to_source(program: &Program) -> Result<String> {
    let lines: Vec<String> = decode(program.words())?.iter().map(format).collect();
    Ok(lines.join("\n"))
}
