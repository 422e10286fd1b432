//! 伪汇编指令集
//!
//! `eax` 是累加器，`ebx` 是辅助寄存器，`edx` 是除法使用的扩展寄存器。
//! `jz` 在累加器为 0 时跳转。
//!
//! 注意：二元运算尾部的操作数顺序与 x86 相反。执行尾部指令时，弹出的
//! 左操作数在 `ebx`，右操作数在 `eax`，结果 `左 op 右` 写回 `eax`。
//! 例如 `10 - 3`：
//!
//! ```text
//! mov eax, 10     ; 左操作数
//! push eax
//! mov eax, 3      ; 右操作数
//! pop ebx         ; ebx = 10, eax = 3
//! sub eax, ebx    ; eax = ebx - eax = 7
//! ```
//!
//! `idiv ebx` 同理：`eax = ebx / eax`，`edx = ebx % eax`；
//! `cmpgt eax, ebx` 得到 `ebx > eax` 时为 1，否则为 0。
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    LoadImmediate(i64),
    Load(String),
    Store(String),
    Push,
    Pop,
    Add,
    Sub,
    Mul,
    ClearExtension,
    Div,
    MoveRemainder,
    CompareEq,
    CompareGt,
    Label(String),
    JumpIfZero(String),
    Jump(String),
    Output,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::LoadImmediate(value) => write!(f, "mov eax, {}", value),
            Instruction::Load(name) => write!(f, "mov eax, {}", name),
            Instruction::Store(name) => write!(f, "mov {}, eax", name),
            Instruction::Push => f.write_str("push eax"),
            Instruction::Pop => f.write_str("pop ebx"),
            Instruction::Add => f.write_str("add eax, ebx"),
            Instruction::Sub => f.write_str("sub eax, ebx"),
            Instruction::Mul => f.write_str("imul eax, ebx"),
            Instruction::ClearExtension => f.write_str("xor edx, edx"),
            Instruction::Div => f.write_str("idiv ebx"),
            Instruction::MoveRemainder => f.write_str("mov eax, edx"),
            Instruction::CompareEq => f.write_str("cmpeq eax, ebx"),
            Instruction::CompareGt => f.write_str("cmpgt eax, ebx"),
            Instruction::Label(label) => write!(f, "{}:", label),
            Instruction::JumpIfZero(label) => write!(f, "jz {}", label),
            Instruction::Jump(label) => write!(f, "jmp {}", label),
            Instruction::Output => f.write_str("out eax"),
        }
    }
}
