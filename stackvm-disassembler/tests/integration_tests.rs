//! Integration tests for the stackvm disassembler
//!
//! Assembles source, disassembles it, and checks the two views agree.

use stackvm_assembler::assemble;
use stackvm_disassembler::{decode, disassemble, to_source, DisassemblerError};
use stackvm_spec::{Opcode, Program};

#[test]
fn test_source_survives_round_trip() {
    let source = "iconst 10\ngstore 0\ngload 0\ncall 12 1 0\nprint\nhalt";
    let program = assemble(source).unwrap();

    let regenerated = to_source(&program).unwrap();
    assert_eq!(regenerated, source);
    assert_eq!(assemble(&regenerated).unwrap(), program);
}

#[test]
fn test_comments_do_not_survive() {
    let program = assemble("# setup\niconst 1 # one\nprint").unwrap();
    assert_eq!(to_source(&program).unwrap(), "iconst 1\nprint");
}

#[test]
fn test_non_numeric_operand_reads_back_as_zero() {
    let program = assemble("brt loop").unwrap();
    assert_eq!(to_source(&program).unwrap(), "brt 0");
}

#[test]
fn test_truncated_assembly_reads_back_short() {
    let program = assemble("iadd call 5").unwrap();
    let decoded = decode(program.words()).unwrap();

    assert_eq!(decoded.len(), 2);
    assert_eq!(decoded[1].opcode, Opcode::Call);
    assert_eq!(decoded[1].missing, 2);

    let listing = disassemble(&program).unwrap();
    assert!(listing.contains("missing 2 operand(s)"));
}

#[test]
fn test_listing_from_raw_bytes() {
    let bytes = Program::from(vec![9, 3, 9, 4, 1, 14, 18]).to_bytes();
    let program = Program::from_bytes(&bytes).unwrap();

    let listing = disassemble(&program).unwrap();
    assert!(listing.contains("0004:  iadd"));
    assert!(listing.contains("5 instructions"));
}

#[test]
fn test_unknown_opcode_reports_offset() {
    let program = Program::from(vec![14, 15, -2]);
    match disassemble(&program) {
        Err(DisassemblerError::UnknownOpcode { offset, word }) => {
            assert_eq!(offset, 2);
            assert_eq!(word, -2);
        }
        other => panic!("Expected UnknownOpcode, got {:?}", other),
    }
}
