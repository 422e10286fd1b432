pub mod error;
pub mod config;
pub mod ast;
pub mod codegen;
pub mod program;
pub mod demos;

pub use ast::{Node, Operator};
pub use codegen::{CodeGenerator, Instruction, LabelAllocator, generate};
pub use config::CodegenOptions;
pub use error::{CodegenError, CodegenResult};
pub use program::{Listing, Program};
