//! 代码生成上下文和状态管理
use std::collections::{BTreeSet, HashSet};

use crate::codegen::instr::Instruction;
use crate::config::CodegenOptions;
use crate::error::{CodegenResult, duplicate_label, undefined_variable};

/// 代码生成器核心上下文
///
/// 遍历语法树时指令累积在 `code` 中，`generator.rs` 中的公开入口
/// 在遍历结束后一次性取走。
#[derive(Debug, Clone, Default)]
pub struct CodeGenerator {
    pub options: CodegenOptions,
    pub(crate) code: Vec<Instruction>,
    symbols: BTreeSet<String>,       // 严格模式下允许的名称
    labels_seen: HashSet<String>,    // 当前输出中已定义的标签
}

impl CodeGenerator {
    pub fn new() -> Self {
        Self::with_options(CodegenOptions::default())
    }

    pub fn with_options(options: CodegenOptions) -> Self {
        let symbols = options.extra_symbols.clone();
        Self {
            options,
            code: Vec::new(),
            symbols,
            labels_seen: HashSet::new(),
        }
    }

    /// 声明名称（加入严格模式的符号集）
    pub fn declare(&mut self, name: impl Into<String>) {
        self.symbols.insert(name.into());
    }

    /// 发射一条指令到代码缓冲区
    pub fn emit(&mut self, instruction: Instruction) {
        self.code.push(instruction);
    }

    /// 严格模式下检查名称是否已声明
    pub fn check_symbol(&self, name: &str) -> CodegenResult<()> {
        if self.options.strict_symbols && !self.symbols.contains(name) {
            return Err(undefined_variable(name));
        }
        Ok(())
    }

    /// 登记一个标签；同一次输出中重复出现则报错
    pub(crate) fn claim_label(&mut self, label: &str) -> CodegenResult<()> {
        if !self.labels_seen.insert(label.to_string()) {
            return Err(duplicate_label(label));
        }
        Ok(())
    }

    /// 开始新的输出：清空缓冲区和已登记的标签
    pub(crate) fn reset_output(&mut self) {
        self.code.clear();
        self.labels_seen.clear();
    }
}
