//! # stackvm Instruction Set
//!
//! Word-oriented instruction set for a small stack-based virtual machine.
//!
//! ## Key Features
//! - 19 instructions, opcodes 0-18
//! - Each instruction is an opcode word followed by `arity` operand words
//! - Words are 4-byte signed integers in native byte order
//! - No header, magic number, or length field in compiled artifacts
//!
//! ## Example
//!
//! ```rust
//! use stackvm_spec::{lookup, Opcode};
//!
//! let spec = lookup("iconst").unwrap();
//! assert_eq!(spec.opcode, Opcode::Iconst);
//! assert_eq!(spec.arity, 1);
//! ```

pub mod error;
pub mod opcode;
pub mod instruction;
pub mod table;
pub mod program;

pub use error::{IsaError, Result};
pub use opcode::Opcode;
pub use instruction::{InstructionSpec, Mnemonic};
pub use table::{instruction_table, lookup, lookup_opcode};
pub use program::Program;

/// Machine word
pub type Word = i32;

/// Size of an encoded word in bytes
pub const WORD_SIZE: usize = std::mem::size_of::<Word>();

/// Most operands any instruction takes (`call`)
pub const MAX_ARITY: usize = 3;

/// Maximum number of visible characters in a mnemonic
pub const MAX_MNEMONIC_LEN: usize = 7;

/// Signal value the fuzz harness reserves for its own timeout (SIGALRM on Linux)
pub const TIMEOUT_SIGNAL: i32 = 14;
