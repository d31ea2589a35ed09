//! # stackvm Opcode Definitions
//!
//! Opcodes are plain words (0-18). The instruction families are:
//! - 0: No operation (NOOP)
//! - 1-3: Arithmetic (IADD, ISUB, IMUL)
//! - 4-5: Compare (ILT, IEQ)
//! - 6-8: Branch (BR, BRT, BRF)
//! - 9-13: Load/Store (ICONST, LOAD, GLOAD, STORE, GSTORE)
//! - 14-15: Stack (PRINT, POP)
//! - 16-17: Call (CALL, RET)
//! - 18: System (HALT)

use crate::error::{IsaError, Result};
use crate::Word;

/// Instruction opcode (values 0-18)
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Opcode {
    /// NOOP: do nothing
    Noop = 0,

    // ========== Arithmetic (1-3) ==========
    /// IADD: push(pop + pop)
    Iadd = 1,
    /// ISUB: push(a - b)
    Isub = 2,
    /// IMUL: push(pop * pop)
    Imul = 3,

    // ========== Compare (4-5) ==========
    /// ILT: push(a < b)
    Ilt = 4,
    /// IEQ: push(a == b)
    Ieq = 5,

    // ========== Branch (6-8) ==========
    /// BR addr: unconditional jump
    Br = 6,
    /// BRT addr: jump if pop is true
    Brt = 7,
    /// BRF addr: jump if pop is false
    Brf = 8,

    // ========== Load/Store (9-13) ==========
    /// ICONST value: push constant
    Iconst = 9,
    /// LOAD offset: push local
    Load = 10,
    /// GLOAD addr: push global
    Gload = 11,
    /// STORE offset: pop into local
    Store = 12,
    /// GSTORE addr: pop into global
    Gstore = 13,

    // ========== Stack (14-15) ==========
    /// PRINT: pop and print
    Print = 14,
    /// POP: discard top of stack
    Pop = 15,

    // ========== Call (16-17) ==========
    /// CALL addr nargs nlocals: push frame and jump
    Call = 16,
    /// RET: pop frame and return
    Ret = 17,

    // ========== System (18) ==========
    /// HALT: stop the machine
    Halt = 18,
}

impl Opcode {
    /// Number of opcodes
    pub const COUNT: usize = 19;

    /// Every opcode, in numeric order
    pub const ALL: [Opcode; Self::COUNT] = [
        Opcode::Noop,
        Opcode::Iadd,
        Opcode::Isub,
        Opcode::Imul,
        Opcode::Ilt,
        Opcode::Ieq,
        Opcode::Br,
        Opcode::Brt,
        Opcode::Brf,
        Opcode::Iconst,
        Opcode::Load,
        Opcode::Gload,
        Opcode::Store,
        Opcode::Gstore,
        Opcode::Print,
        Opcode::Pop,
        Opcode::Call,
        Opcode::Ret,
        Opcode::Halt,
    ];

    /// Try to convert from a word
    pub fn from_word(value: Word) -> Option<Self> {
        usize::try_from(value)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// Convert to a word
    #[inline]
    pub const fn to_word(self) -> Word {
        self as Word
    }

    /// Number of operand words following this opcode
    #[inline]
    pub const fn arity(self) -> usize {
        match self {
            Opcode::Br
            | Opcode::Brt
            | Opcode::Brf
            | Opcode::Iconst
            | Opcode::Load
            | Opcode::Gload
            | Opcode::Store
            | Opcode::Gstore => 1,
            Opcode::Call => 3,
            _ => 0,
        }
    }

    /// Assembly mnemonic
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Noop => "noop",
            Opcode::Iadd => "iadd",
            Opcode::Isub => "isub",
            Opcode::Imul => "imul",
            Opcode::Ilt => "ilt",
            Opcode::Ieq => "ieq",
            Opcode::Br => "br",
            Opcode::Brt => "brt",
            Opcode::Brf => "brf",
            Opcode::Iconst => "iconst",
            Opcode::Load => "load",
            Opcode::Gload => "gload",
            Opcode::Store => "store",
            Opcode::Gstore => "gstore",
            Opcode::Print => "print",
            Opcode::Pop => "pop",
            Opcode::Call => "call",
            Opcode::Ret => "ret",
            Opcode::Halt => "halt",
        }
    }
}

impl TryFrom<Word> for Opcode {
    type Error = IsaError;

    fn try_from(value: Word) -> Result<Self> {
        Self::from_word(value).ok_or(IsaError::InvalidOpcode(value))
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}
