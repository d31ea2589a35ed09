//! # stackvm Disassembler
//!
//! Turn stackvm word streams back into assembly text.
//!
//! The word format has no header, so a listing is produced by walking the
//! stream with the instruction table: each opcode word claims the next
//! `arity` words as operands. A stream that ends inside an instruction
//! decodes with the missing operands noted.
//!
//! ## Example
//!
//! ```rust
//! use stackvm_spec::Program;
//! use stackvm_disassembler::disassemble;
//!
//! let program = Program::from(vec![9, 5, 14, 18]);
//! let listing = disassemble(&program).unwrap();
//! assert!(listing.contains("iconst 5"));
//! ```

pub mod error;
pub mod decoder;
pub mod formatter;
pub mod disassembler;

pub use error::{DisassemblerError, Result};
pub use decoder::{decode, DecodedInstruction};
pub use disassembler::{disassemble, to_source};
pub use formatter::format;
