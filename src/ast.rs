use std::fmt;
use std::str::FromStr;

use crate::codegen::labels::LabelAllocator;
use crate::error::{CodegenError, CodegenResult, unsupported_operator};

/// 语法树节点
///
/// 克隆出的 `While`/`If` 与原节点共用标签编号，两者出现在同一份输出中时
/// 代码生成器会返回 `DuplicateLabel`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Number(i64),
    Variable(String),
    BinaryOp {
        op: Operator,
        left: Box<Node>,
        right: Box<Node>,
    },
    Let {
        name: String,
        value: Box<Node>,
    },
    While {
        label: usize,
        condition: Box<Node>,
        body: Box<Node>,
    },
    If {
        label: usize,
        condition: Box<Node>,
        then_branch: Box<Node>,
        else_branch: Box<Node>,
    },
    /// 参数只作记录，函数体在外层作用域中求值
    Lambda {
        params: (String, String),
        body: Box<Node>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    Gt,
}

impl Operator {
    pub const ALL: [Operator; 7] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Mod,
        Operator::Eq,
        Operator::Gt,
    ];

    /// 运算符的源码标记
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Mod => "mod",
            Operator::Eq => "==",
            Operator::Gt => ">",
        }
    }
}

impl FromStr for Operator {
    type Err = CodegenError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.symbol() == tag)
            .ok_or_else(|| unsupported_operator(tag))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Node {
    pub fn number(value: i64) -> Self {
        Node::Number(value)
    }

    pub fn var(name: impl Into<String>) -> Self {
        Node::Variable(name.into())
    }

    pub fn binary(op: Operator, left: Node, right: Node) -> Self {
        Node::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// 从文本运算符标记（如 `"mod"`）构造二元节点，未知标记报错
    pub fn binary_tagged(tag: &str, left: Node, right: Node) -> CodegenResult<Self> {
        Ok(Node::binary(tag.parse()?, left, right))
    }

    pub fn bind(name: impl Into<String>, value: Node) -> Self {
        Node::Let {
            name: name.into(),
            value: Box::new(value),
        }
    }

    /// 构造循环，标签编号取自全局分配器
    pub fn while_loop(condition: Node, body: Node) -> Self {
        Node::while_loop_in(LabelAllocator::global(), condition, body)
    }

    pub fn while_loop_in(labels: &LabelAllocator, condition: Node, body: Node) -> Self {
        Node::While {
            label: labels.next_while(),
            condition: Box::new(condition),
            body: Box::new(body),
        }
    }

    /// 构造条件分支，标签编号取自全局分配器
    pub fn if_else(condition: Node, then_branch: Node, else_branch: Node) -> Self {
        Node::if_else_in(LabelAllocator::global(), condition, then_branch, else_branch)
    }

    pub fn if_else_in(
        labels: &LabelAllocator,
        condition: Node,
        then_branch: Node,
        else_branch: Node,
    ) -> Self {
        Node::If {
            label: labels.next_if(),
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }

    pub fn lambda(param1: impl Into<String>, param2: impl Into<String>, body: Node) -> Self {
        Node::Lambda {
            params: (param1.into(), param2.into()),
            body: Box::new(body),
        }
    }

    /// 收集树中所有 `Let` 绑定的名称（按求值顺序，首次出现的位置）
    pub fn bound_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        self.collect_bound_names(&mut names);
        names
    }

    fn collect_bound_names(&self, names: &mut Vec<String>) {
        match self {
            Node::Number(_) | Node::Variable(_) => {}
            Node::BinaryOp { left, right, .. } => {
                left.collect_bound_names(names);
                right.collect_bound_names(names);
            }
            Node::Let { name, value } => {
                value.collect_bound_names(names);
                if !names.contains(name) {
                    names.push(name.clone());
                }
            }
            Node::While { condition, body, .. } => {
                condition.collect_bound_names(names);
                body.collect_bound_names(names);
            }
            Node::If {
                condition,
                then_branch,
                else_branch,
                ..
            } => {
                condition.collect_bound_names(names);
                then_branch.collect_bound_names(names);
                else_branch.collect_bound_names(names);
            }
            Node::Lambda { body, .. } => body.collect_bound_names(names),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_tags() {
        for op in Operator::ALL {
            assert_eq!(op.symbol().parse::<Operator>().unwrap(), op);
        }
        assert_eq!(Operator::Mod.to_string(), "mod");
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let err = Node::binary_tagged("xyz", Node::number(1), Node::number(2)).unwrap_err();
        assert_eq!(err, CodegenError::UnsupportedOperator("xyz".to_string()));

        // if/lambda/output 以及具名调用都不是运算符
        for tag in ["if", "lambda", "output", "pgcd"] {
            assert!(tag.parse::<Operator>().is_err(), "{} should be rejected", tag);
        }
    }

    #[test]
    fn test_labels_drawn_at_construction() {
        let labels = LabelAllocator::new();
        let first = Node::while_loop_in(&labels, Node::number(1), Node::number(2));
        let cond = Node::if_else_in(&labels, Node::number(1), Node::number(2), Node::number(3));
        let second = Node::while_loop_in(&labels, Node::number(1), Node::number(2));

        assert!(matches!(first, Node::While { label: 0, .. }));
        assert!(matches!(cond, Node::If { label: 0, .. }));
        assert!(matches!(second, Node::While { label: 1, .. }));
    }

    #[test]
    fn test_bound_names_in_evaluation_order() {
        let tree = Node::bind(
            "total",
            Node::binary(
                Operator::Add,
                Node::bind("a", Node::number(1)),
                Node::binary(
                    Operator::Add,
                    Node::bind("b", Node::var("a")),
                    Node::bind("a", Node::number(3)),
                ),
            ),
        );
        assert_eq!(tree.bound_names(), vec!["a", "b", "total"]);
    }
}
