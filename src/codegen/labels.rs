//! 控制流节点的跳转标签分配
use std::sync::atomic::{AtomicUsize, Ordering};

pub const WHILE_START_PREFIX: &str = "while_start_";
pub const WHILE_END_PREFIX: &str = "while_end_";
pub const IF_ELSE_PREFIX: &str = "if_else_";
pub const IF_END_PREFIX: &str = "if_end_";

static GLOBAL: LabelAllocator = LabelAllocator::new();

/// 标签分配器：每种控制流结构一个独立的单调计数器
///
/// 每构造一个节点分配一次编号，除非调用 [`LabelAllocator::reset`]，
/// 编号不会重复使用。
#[derive(Debug, Default)]
pub struct LabelAllocator {
    while_counter: AtomicUsize,
    if_counter: AtomicUsize,
}

impl LabelAllocator {
    pub const fn new() -> Self {
        Self {
            while_counter: AtomicUsize::new(0),
            if_counter: AtomicUsize::new(0),
        }
    }

    /// 全局分配器（供 `Node::while_loop` / `Node::if_else` 使用）
    pub fn global() -> &'static LabelAllocator {
        &GLOBAL
    }

    pub fn next_while(&self) -> usize {
        self.while_counter.fetch_add(1, Ordering::Relaxed)
    }

    pub fn next_if(&self) -> usize {
        self.if_counter.fetch_add(1, Ordering::Relaxed)
    }

    pub fn peek_while(&self) -> usize {
        self.while_counter.load(Ordering::Relaxed)
    }

    pub fn peek_if(&self) -> usize {
        self.if_counter.load(Ordering::Relaxed)
    }

    /// 重置（用于测试）
    pub fn reset(&self) {
        self.while_counter.store(0, Ordering::Relaxed);
        self.if_counter.store(0, Ordering::Relaxed);
    }
}

pub fn while_start(label: usize) -> String {
    format!("{}{}", WHILE_START_PREFIX, label)
}

pub fn while_end(label: usize) -> String {
    format!("{}{}", WHILE_END_PREFIX, label)
}

pub fn if_else(label: usize) -> String {
    format!("{}{}", IF_ELSE_PREFIX, label)
}

pub fn if_end(label: usize) -> String {
    format!("{}{}", IF_END_PREFIX, label)
}
