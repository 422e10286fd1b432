use thiserror::Error;

/// 代码生成阶段的错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodegenError {
    #[error("Unsupported operator: '{0}'")]
    UnsupportedOperator(String),

    #[error("Undefined variable: '{0}'")]
    UndefinedVariable(String),

    /// 同一份输出中出现了两次相同的跳转标签（克隆节点或混用分配器）
    #[error("Duplicate label: '{0}'")]
    DuplicateLabel(String),

    #[error("IO error: {0}")]
    Io(String),
}

pub type CodegenResult<T> = Result<T, CodegenError>;

impl From<std::io::Error> for CodegenError {
    fn from(err: std::io::Error) -> Self {
        CodegenError::Io(err.to_string())
    }
}

pub fn unsupported_operator(tag: impl Into<String>) -> CodegenError {
    CodegenError::UnsupportedOperator(tag.into())
}

pub fn undefined_variable(name: impl Into<String>) -> CodegenError {
    CodegenError::UndefinedVariable(name.into())
}

pub fn duplicate_label(label: impl Into<String>) -> CodegenError {
    CodegenError::DuplicateLabel(label.into())
}
