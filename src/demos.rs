//! 示例程序
//!
//! `input` 视为外部提供的位置，不在数据段中声明。
use crate::ast::{Node, Operator};
use crate::codegen::LabelAllocator;
use crate::program::Program;

#[derive(Debug, Clone, Copy)]
pub struct Demo {
    pub name: &'static str,
    pub description: &'static str,
    pub build: fn(&LabelAllocator) -> Program,
}

pub static DEMOS: [Demo; 3] = [
    Demo {
        name: "price",
        description: "price including 19% tax",
        build: price_with_tax,
    },
    Demo {
        name: "gcd-loop",
        description: "greatest common divisor with a while loop",
        build: gcd_loop,
    },
    Demo {
        name: "gcd-conditional",
        description: "greatest common divisor behind a conditional and a lambda",
        build: gcd_conditional,
    },
];

pub fn find(name: &str) -> Option<&'static Demo> {
    DEMOS.iter().find(|demo| demo.name == name)
}

/// 含税价格：prixTtc = prixHt * 119 / 100
pub fn price_with_tax(_labels: &LabelAllocator) -> Program {
    Program::new()
        .declare("prixHt")
        .declare("prixTtc")
        .fragment(Node::bind("prixHt", Node::number(200)))
        .fragment(Node::bind(
            "prixTtc",
            Node::binary(Operator::Mul, Node::var("prixHt"), Node::number(119)),
        ))
        .fragment(Node::bind(
            "prixTtc",
            Node::binary(Operator::Div, Node::var("prixTtc"), Node::number(100)),
        ))
}

/// 用 while 循环求最大公约数
pub fn gcd_loop(labels: &LabelAllocator) -> Program {
    Program::new()
        .fragment(Node::bind("a", Node::var("input")))
        .fragment(Node::bind("b", Node::var("input")))
        .fragment(euclid_loop(labels))
        .infer_data()
}

/// 条件分支与 lambda 包裹的最大公约数
pub fn gcd_conditional(labels: &LabelAllocator) -> Program {
    // 循环结束时累加器为 0，加上 a 即为结果
    let then_branch = Node::binary(Operator::Add, euclid_loop(labels), Node::var("a"));
    let body = Node::if_else_in(
        labels,
        Node::binary(Operator::Gt, Node::var("b"), Node::number(0)),
        then_branch,
        Node::var("a"),
    );

    Program::new()
        .fragment(Node::bind("x", Node::var("input")))
        .fragment(Node::bind("y", Node::var("input")))
        .fragment(Node::bind("a", Node::var("x")))
        .fragment(Node::bind("b", Node::var("y")))
        .fragment(Node::bind("pgcd", Node::lambda("a", "b", body)))
        .infer_data()
}

/// `while b > 0 { aux = a mod b; a = b; b = aux }`，语句之间用 `+` 串联
fn euclid_loop(labels: &LabelAllocator) -> Node {
    let aux = Node::bind("aux", Node::binary(Operator::Mod, Node::var("a"), Node::var("b")));
    let update_a = Node::bind("a", Node::var("b"));
    let update_b = Node::bind("b", Node::var("aux"));
    let step = Node::binary(Operator::Add, aux, Node::binary(Operator::Add, update_a, update_b));

    Node::while_loop_in(
        labels,
        Node::binary(Operator::Gt, Node::var("b"), Node::number(0)),
        Node::bind("loop_body", step),
    )
}
