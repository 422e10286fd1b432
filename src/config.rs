//! 代码生成选项
use std::collections::BTreeSet;

/// 代码生成选项
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodegenOptions {
    /// 严格模式：拒绝符号集之外的 `Variable`/`Let` 名称
    pub strict_symbols: bool,
    /// 除数据段外，严格模式下额外允许的名称
    pub extra_symbols: BTreeSet<String>,
}

impl CodegenOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 严格模式，符号集初始为空
    pub fn strict() -> Self {
        Self {
            strict_symbols: true,
            extra_symbols: BTreeSet::new(),
        }
    }

    pub fn with_symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_symbols.extend(symbols.into_iter().map(Into::into));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_permissive() {
        let options = CodegenOptions::default();
        assert!(!options.strict_symbols);
        assert!(options.extra_symbols.is_empty());
    }

    #[test]
    fn test_strict_with_symbols() {
        let options = CodegenOptions::strict().with_symbols(["b", "a", "b"]);
        assert!(options.strict_symbols);
        assert_eq!(options.extra_symbols.into_iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
