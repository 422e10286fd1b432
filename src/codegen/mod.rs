//! 伪汇编代码生成器
//!
//! 本模块将语法树转换为基于累加器和栈的线性指令序列，
//! 控制流使用显式跳转标签。

pub mod context;
pub mod instr;
pub mod labels;
mod expressions;
mod statements;
mod generator;

// 公开 CodeGenerator 作为代码生成器的入口
pub use context::CodeGenerator;
pub use expressions::operator_tail;
pub use generator::generate;
pub use instr::Instruction;
pub use labels::LabelAllocator;
