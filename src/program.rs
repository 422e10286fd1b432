//! 完整程序清单：数据段、生成的代码和输出指令
use std::fmt;
use std::io::Write;

use log::debug;

use crate::ast::Node;
use crate::codegen::{CodeGenerator, Instruction};
use crate::config::CodegenOptions;
use crate::error::CodegenResult;

/// 顶层片段序列及其使用的存储位置
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub data: Vec<String>,
    pub fragments: Vec<Node>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    /// 声明一个双字存储位置，重复的名称只保留一次
    pub fn declare(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.data.contains(&name) {
            self.data.push(name);
        }
        self
    }

    pub fn fragment(mut self, node: Node) -> Self {
        self.fragments.push(node);
        self
    }

    /// 声明片段中所有 `Let` 绑定的名称
    pub fn infer_data(mut self) -> Self {
        let names: Vec<String> = self.fragments.iter().flat_map(Node::bound_names).collect();
        for name in names {
            self = self.declare(name);
        }
        self
    }

    /// 生成完整清单。严格模式下数据段中的名称加入符号集。
    pub fn assemble(&self, options: &CodegenOptions) -> CodegenResult<Listing> {
        let mut generator = CodeGenerator::with_options(options.clone());
        for name in &self.data {
            generator.declare(name.as_str());
        }

        // 所有片段属于同一份输出，标签不能跨片段重复
        let code = generator.lower_all(&self.fragments)?;

        // 数据段
        let mut lines = Vec::new();
        lines.push("DATA SEGMENT".to_string());
        for name in &self.data {
            lines.push(format!("\t{} DD", name));
        }
        lines.push("DATA ENDS".to_string());

        // 代码段
        lines.push("CODE SEGMENT".to_string());
        lines.extend(code.iter().map(ToString::to_string));
        lines.push(Instruction::Output.to_string());
        lines.push("CODE ENDS".to_string());

        debug!(
            "assembled {} fragments, {} data words, {} lines",
            self.fragments.len(),
            self.data.len(),
            lines.len()
        );
        Ok(Listing { lines })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub lines: Vec<String>,
}

impl Listing {
    /// 写出清单，每行一条指令
    pub fn write_to(&self, mut out: impl Write) -> CodegenResult<()> {
        write!(out, "{}", self)?;
        out.flush()?;
        Ok(())
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Operator;
    use crate::codegen::LabelAllocator;
    use crate::error::CodegenError;

    #[test]
    fn test_empty_program() {
        let listing = Program::new().assemble(&CodegenOptions::default()).unwrap();
        assert_eq!(
            listing.lines,
            vec!["DATA SEGMENT", "DATA ENDS", "CODE SEGMENT", "out eax", "CODE ENDS"]
        );
    }

    #[test]
    fn test_declare_deduplicates() {
        let program = Program::new().declare("a").declare("b").declare("a");
        assert_eq!(program.data, vec!["a", "b"]);
    }

    #[test]
    fn test_fragments_in_order() {
        let program = Program::new()
            .declare("x")
            .fragment(Node::bind("x", Node::number(1)))
            .fragment(Node::bind("x", Node::binary(Operator::Add, Node::var("x"), Node::number(1))));
        let listing = program.assemble(&CodegenOptions::default()).unwrap();
        assert_eq!(
            listing.lines,
            vec![
                "DATA SEGMENT",
                "\tx DD",
                "DATA ENDS",
                "CODE SEGMENT",
                "mov eax, 1",
                "mov x, eax",
                "mov eax, x",
                "push eax",
                "mov eax, 1",
                "pop ebx",
                "add eax, ebx",
                "mov x, eax",
                "out eax",
                "CODE ENDS",
            ]
        );
    }

    #[test]
    fn test_strict_uses_data_segment() {
        let program = Program::new()
            .fragment(Node::bind("y", Node::var("input")))
            .infer_data();
        assert_eq!(program.data, vec!["y"]);

        let strict = CodegenOptions::strict();
        assert_eq!(
            program.assemble(&strict),
            Err(CodegenError::UndefinedVariable("input".to_string()))
        );
        assert!(program.assemble(&strict.with_symbols(["input"])).is_ok());
    }

    #[test]
    fn test_label_reused_across_fragments() {
        let labels = LabelAllocator::new();
        let lp = Node::while_loop_in(&labels, Node::var("x"), Node::number(0));
        let program = Program::new().declare("x").fragment(lp.clone()).fragment(lp);
        assert_eq!(
            program.assemble(&CodegenOptions::default()),
            Err(CodegenError::DuplicateLabel("while_start_0".to_string()))
        );
    }

    #[test]
    fn test_global_and_private_allocators_collide() {
        let global = Node::while_loop(Node::var("x"), Node::number(0));
        let label = match &global {
            Node::While { label, .. } => *label,
            _ => unreachable!(),
        };

        // 私有分配器追到与全局分配器相同的编号
        let private = LabelAllocator::new();
        for _ in 0..label {
            private.next_while();
        }
        let clash = Node::while_loop_in(&private, Node::var("x"), Node::number(0));

        let program = Program::new().fragment(global).fragment(clash);
        assert_eq!(
            program.assemble(&CodegenOptions::default()),
            Err(CodegenError::DuplicateLabel(format!("while_start_{}", label)))
        );
    }

    #[test]
    fn test_write_to() {
        let listing = Listing {
            lines: vec!["a".to_string(), "b".to_string()],
        };
        let mut buf = Vec::new();
        listing.write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a\nb\n");
    }
}
