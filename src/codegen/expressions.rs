//! 表达式代码生成
use log::trace;

use crate::ast::{Node, Operator};
use crate::codegen::context::CodeGenerator;
use crate::codegen::instr::Instruction;
use crate::error::CodegenResult;

impl CodeGenerator {
    /// 生成任意节点的代码，指令追加到代码缓冲区
    pub fn lower_node(&mut self, node: &Node) -> CodegenResult<()> {
        match node {
            Node::Number(value) => {
                self.emit(Instruction::LoadImmediate(*value));
            }
            Node::Variable(name) => {
                self.check_symbol(name)?;
                self.emit(Instruction::Load(name.clone()));
            }
            Node::BinaryOp { op, left, right } => {
                self.lower_binary(*op, left, right)?;
            }
            Node::Let { name, value } => {
                self.lower_let(name, value)?;
            }
            Node::While { label, condition, body } => {
                self.lower_while(*label, condition, body)?;
            }
            Node::If {
                label,
                condition,
                then_branch,
                else_branch,
            } => {
                self.lower_if(*label, condition, then_branch, else_branch)?;
            }
            Node::Lambda { params, body } => {
                self.lower_lambda(params, body)?;
            }
        }
        Ok(())
    }

    /// 生成二元表达式代码
    ///
    /// 左操作数先求值并压栈，再求值右操作数，所以出栈得到的总是左操作数。
    fn lower_binary(&mut self, op: Operator, left: &Node, right: &Node) -> CodegenResult<()> {
        trace!("lowering binary '{}'", op);
        self.lower_node(left)?;
        self.emit(Instruction::Push);
        self.lower_node(right)?;
        self.emit(Instruction::Pop);
        // 运算尾部：ebx = 左，eax = 右
        for instruction in operator_tail(op) {
            self.emit(instruction);
        }
        Ok(())
    }
}

/// 运算符尾部指令：把 `ebx`（左）和 `eax`（右）合并到 `eax`
pub fn operator_tail(op: Operator) -> Vec<Instruction> {
    match op {
        Operator::Add => vec![Instruction::Add],
        Operator::Sub => vec![Instruction::Sub],
        Operator::Mul => vec![Instruction::Mul],
        // 先清零扩展寄存器，商留在 eax
        Operator::Div => vec![Instruction::ClearExtension, Instruction::Div],
        // 余数在 edx，复制回累加器
        Operator::Mod => vec![
            Instruction::ClearExtension,
            Instruction::Div,
            Instruction::MoveRemainder,
        ],
        Operator::Eq => vec![Instruction::CompareEq],
        Operator::Gt => vec![Instruction::CompareGt],
    }
}
