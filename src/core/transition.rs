//! Transition 5-tuples.

use super::pattern::overlaps;
use super::symbol::{write_sequence, InputSymbol, Symbol};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A move `(from, input, stack_top, to, replacement)`.
///
/// `stack_top` is read top-down and an empty pattern means the stack is not
/// inspected. `replacement` is pushed after popping `stack_top`, with its
/// first symbol ending up on top.
///
/// The `Display` form is `[input,top->replacement]`. The alternate form
/// (`{:#}`) also names the next state.
///
/// # Example
///
/// ```rust
/// use dpda::core::{InputSymbol, Symbol, Transition};
///
/// let push = Transition::new(0, InputSymbol::from('('), vec![], 0, vec![Symbol::new("P")]);
///
/// assert_eq!(push.to_string(), "[(,eps->P]");
/// assert_eq!(format!("{push:#}"), "[(,eps->P,(0)]");
/// assert!(push.is_stack_epsilon());
/// assert!(!push.is_unconditional_epsilon());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Transition {
    /// State the move leaves
    pub from: usize,
    /// Input consumed, or epsilon
    pub input: InputSymbol,
    /// Symbols expected on top of the stack, top first
    pub stack_top: Vec<Symbol>,
    /// State the move enters
    pub to: usize,
    /// Symbols pushed in place of `stack_top`, top first
    pub replacement: Vec<Symbol>,
}

impl Transition {
    pub fn new(
        from: usize,
        input: InputSymbol,
        stack_top: Vec<Symbol>,
        to: usize,
        replacement: Vec<Symbol>,
    ) -> Self {
        Self {
            from,
            input,
            stack_top,
            to,
            replacement,
        }
    }

    /// The move ignores the stack.
    pub fn is_stack_epsilon(&self) -> bool {
        self.stack_top.is_empty()
    }

    /// The move neither reads input nor inspects the stack, so it can fire
    /// from any configuration of its source state.
    pub fn is_unconditional_epsilon(&self) -> bool {
        self.input.is_epsilon() && self.is_stack_epsilon()
    }

    /// Net change in stack height when this move fires.
    pub fn stack_delta(&self) -> isize {
        self.replacement.len() as isize - self.stack_top.len() as isize
    }

    /// Check whether `other` restates this move.
    ///
    /// States and input must be equal. Stack patterns and replacements are
    /// compared with the prefix relation.
    pub fn duplicates(&self, other: &Transition) -> bool {
        self.from == other.from
            && self.input == other.input
            && overlaps(&self.stack_top, &other.stack_top)
            && self.to == other.to
            && overlaps(&self.replacement, &other.replacement)
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},", self.input)?;
        write_sequence(f, &self.stack_top)?;
        f.write_str("->")?;
        write_sequence(f, &self.replacement)?;
        if f.alternate() {
            write!(f, ",({})", self.to)?;
        }
        f.write_str("]")
    }
}
