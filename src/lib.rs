//! Generate Brainfuck programs that print a given ASCII text.
//!
//! ```
//! use ewor_textgen::emit;
//!
//! let program = emit("ab").unwrap();
//! assert_eq!(
//!     program.to_string(),
//!     ">++++++++[<++++++++++++>-]<+>>+++++++++[<+++++++++++>-]<-><<.>."
//! );
//! ```

pub mod bf;
pub mod emit;
pub mod encode;
pub mod errors;
pub mod factor;
pub mod op;

pub use emit::{emit, emit_with, EmitOptions, TextEmitter};
pub use encode::encode;
pub use errors::{BfError, GenError};
pub use factor::{FactorEntry, FactorTable};
pub use op::{Op, Program};
