//! stackvm Assembler
//!
//! Assemble stackvm assembly source into a flat word stream.
//!
//! ## Example
//!
//! ```rust
//! use stackvm_assembler::assemble;
//!
//! let source = r#"
//!     ## push five and print it
//!     iconst 5
//!     print
//!     halt
//! "#;
//!
//! let program = assemble(source).unwrap();
//! assert_eq!(program.words(), &[9, 5, 14, 18]);
//! ```

pub mod error;
pub mod lexer;
pub mod operand;
pub mod assembler;

pub use error::{AssemblerError, Result};
pub use assembler::{assemble, assemble_file, assemble_tokens};
pub use lexer::tokenize;
pub use operand::parse_operand;
