//! 代码生成器主入口
use log::debug;

use crate::ast::Node;
use crate::codegen::context::CodeGenerator;
use crate::codegen::instr::Instruction;
use crate::error::CodegenResult;

impl CodeGenerator {
    /// 主入口：把一棵语法树转换为文本指令行
    pub fn generate(&mut self, node: &Node) -> CodegenResult<Vec<String>> {
        Ok(self.lower(node)?.iter().map(ToString::to_string).collect())
    }

    /// 把一棵语法树转换为类型化指令
    pub fn lower(&mut self, node: &Node) -> CodegenResult<Vec<Instruction>> {
        self.lower_all(std::slice::from_ref(node))
    }

    /// 按顺序转换多个片段，结果属于同一份输出，标签在片段之间也不能重复。
    ///
    /// 开始时清空缓冲区，成功时取走，失败时不会留下部分输出。
    pub fn lower_all(&mut self, nodes: &[Node]) -> CodegenResult<Vec<Instruction>> {
        self.reset_output();
        for node in nodes {
            if let Err(err) = self.lower_node(node) {
                self.reset_output();
                return Err(err);
            }
        }
        debug!("lowered {} fragments into {} instructions", nodes.len(), self.code.len());
        Ok(std::mem::take(&mut self.code))
    }
}

/// 使用默认选项生成代码
pub fn generate(node: &Node) -> CodegenResult<Vec<String>> {
    CodeGenerator::new().generate(node)
}
