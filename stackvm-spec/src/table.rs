//! # Instruction table
//!
//! Process-wide, read-only registry of the 19 instructions. Built once on
//! first use and kept sorted by mnemonic so lookups are a binary search with
//! the same comparator used for sorting.

use std::sync::OnceLock;

use crate::instruction::InstructionSpec;
use crate::opcode::Opcode;

static TABLE: OnceLock<Vec<InstructionSpec>> = OnceLock::new();

/// The instruction table, sorted by mnemonic
pub fn instruction_table() -> &'static [InstructionSpec] {
    TABLE.get_or_init(|| {
        let mut table: Vec<InstructionSpec> = Opcode::ALL
            .iter()
            .filter_map(|&opcode| InstructionSpec::for_opcode(opcode).ok())
            .collect();
        table.sort_by(|a, b| a.mnemonic.as_str().cmp(b.mnemonic.as_str()));
        table
    })
}

/// Find an instruction by exact, case-sensitive mnemonic
pub fn lookup(mnemonic: &str) -> Option<&'static InstructionSpec> {
    let table = instruction_table();
    table
        .binary_search_by(|spec| spec.mnemonic.as_str().cmp(mnemonic))
        .ok()
        .map(|index| &table[index])
}

/// Find the instruction for an opcode
pub fn lookup_opcode(opcode: Opcode) -> Option<&'static InstructionSpec> {
    instruction_table().iter().find(|spec| spec.opcode == opcode)
}
