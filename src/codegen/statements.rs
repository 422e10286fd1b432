//! 绑定与控制流代码生成
use log::trace;

use crate::ast::Node;
use crate::codegen::context::CodeGenerator;
use crate::codegen::instr::Instruction;
use crate::codegen::labels;
use crate::error::CodegenResult;

impl CodeGenerator {
    /// 生成 let 绑定：先求值，再把累加器存入目标位置
    pub(crate) fn lower_let(&mut self, name: &str, value: &Node) -> CodegenResult<()> {
        self.check_symbol(name)?;
        self.lower_node(value)?;
        self.emit(Instruction::Store(name.to_string()));
        Ok(())
    }

    /// 生成 while 循环代码
    pub(crate) fn lower_while(&mut self, label: usize, condition: &Node, body: &Node) -> CodegenResult<()> {
        let start_label = labels::while_start(label);
        let end_label = labels::while_end(label);
        self.claim_label(&start_label)?;
        self.claim_label(&end_label)?;
        trace!("lowering loop {}", label);

        // 条件检查
        self.emit(Instruction::Label(start_label.clone()));
        self.lower_node(condition)?;
        self.emit(Instruction::JumpIfZero(end_label.clone()));

        // 循环体，结束后跳回条件
        self.lower_node(body)?;
        self.emit(Instruction::Jump(start_label));

        // 结束标签
        self.emit(Instruction::Label(end_label));

        Ok(())
    }

    /// 生成 if 语句代码
    pub(crate) fn lower_if(
        &mut self,
        label: usize,
        condition: &Node,
        then_branch: &Node,
        else_branch: &Node,
    ) -> CodegenResult<()> {
        let else_label = labels::if_else(label);
        let end_label = labels::if_end(label);
        self.claim_label(&else_label)?;
        self.claim_label(&end_label)?;
        trace!("lowering conditional {}", label);

        self.lower_node(condition)?;
        self.emit(Instruction::JumpIfZero(else_label.clone()));

        // then 分支
        self.lower_node(then_branch)?;
        self.emit(Instruction::Jump(end_label.clone()));

        // else 分支
        self.emit(Instruction::Label(else_label));
        self.lower_node(else_branch)?;

        self.emit(Instruction::Label(end_label));

        Ok(())
    }

    /// 参数不分配存储，函数体在当前作用域中求值
    pub(crate) fn lower_lambda(&mut self, params: &(String, String), body: &Node) -> CodegenResult<()> {
        trace!("lowering lambda ({}, {}) as its body", params.0, params.1);
        self.lower_node(body)
    }
}
