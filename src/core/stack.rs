//! The run-time stack of a pushdown automaton.

use super::symbol::Symbol;

/// Last-in-first-out stack of symbols owned by a single run.
///
/// # Example
///
/// ```rust
/// use dpda::core::{Stack, Symbol};
///
/// let mut stack = Stack::new();
/// let p = Symbol::new("P");
///
/// stack.apply(&[], &[p.clone()]);
/// assert_eq!(stack.len(), 1);
/// assert!(stack.matches_top(&[p.clone()]));
///
/// stack.apply(&[p], &[]);
/// assert!(stack.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stack {
    // Top of stack is the last element.
    items: Vec<Symbol>,
}

impl Stack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Topmost symbol, if any.
    pub fn top(&self) -> Option<&Symbol> {
        self.items.last()
    }

    /// Iterate from the top of the stack down.
    pub fn iter_top_down(&self) -> impl Iterator<Item = &Symbol> + '_ {
        self.items.iter().rev()
    }

    /// Copy the contents, top of stack first.
    pub fn snapshot(&self) -> Vec<Symbol> {
        self.iter_top_down().cloned().collect()
    }

    /// Check whether `pattern` lies literally on top of the stack.
    ///
    /// The stack must hold at least as many symbols as the pattern. The
    /// empty pattern matches any stack.
    pub fn matches_top(&self, pattern: &[Symbol]) -> bool {
        pattern.len() <= self.items.len()
            && pattern.iter().zip(self.iter_top_down()).all(|(p, s)| p == s)
    }

    /// Pop `pattern` off the top, then push `replacement`.
    ///
    /// The pattern is popped only when it matches the top of the stack. The
    /// first replacement symbol ends up on top. Returns the popped symbols,
    /// top first.
    pub fn apply(&mut self, pattern: &[Symbol], replacement: &[Symbol]) -> Vec<Symbol> {
        let mut popped = Vec::with_capacity(pattern.len());
        if !pattern.is_empty() && self.matches_top(pattern) {
            for _ in 0..pattern.len() {
                if let Some(symbol) = self.items.pop() {
                    popped.push(symbol);
                }
            }
        }
        self.items.extend(replacement.iter().rev().cloned());
        popped
    }
}
