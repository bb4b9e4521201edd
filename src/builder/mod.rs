//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder, shorthand constructors for common
//! transition shapes, and the [`symbols!`](crate::symbols) macro.

pub mod automaton;
pub mod error;
pub mod macros;

pub use automaton::DpdaBuilder;
pub use error::BuildError;

use crate::core::{InputSymbol, Symbol, Transition};

/// Create an unconditional epsilon move that leaves the stack untouched.
///
/// # Example
///
/// ```
/// use dpda::builder::epsilon_transition;
///
/// let t = epsilon_transition(0, 1);
/// assert!(t.is_unconditional_epsilon());
/// assert_eq!(format!("{t:#}"), "[eps,eps->eps,(1)]");
/// ```
pub fn epsilon_transition(from: usize, to: usize) -> Transition {
    Transition::new(from, InputSymbol::Epsilon, Vec::new(), to, Vec::new())
}

/// Create a move that ignores the stack top and pushes `symbols`.
///
/// # Example
///
/// ```
/// use dpda::builder::push_transition;
///
/// let t = push_transition(0, "(", 0, ["P"]);
/// assert_eq!(t.to_string(), "[(,eps->P]");
/// ```
pub fn push_transition<I, S>(
    from: usize,
    input: impl Into<InputSymbol>,
    to: usize,
    symbols: I,
) -> Transition
where
    I: IntoIterator<Item = S>,
    S: Into<Symbol>,
{
    Transition::new(
        from,
        input.into(),
        Vec::new(),
        to,
        symbols.into_iter().map(Into::into).collect(),
    )
}

/// Create a move that pops `top` and pushes nothing.
///
/// # Example
///
/// ```
/// use dpda::builder::pop_transition;
///
/// let t = pop_transition(0, ")", "P", 0);
/// assert_eq!(t.to_string(), "[),P->eps]");
/// ```
pub fn pop_transition(
    from: usize,
    input: impl Into<InputSymbol>,
    top: impl Into<Symbol>,
    to: usize,
) -> Transition {
    Transition::new(from, input.into(), vec![top.into()], to, Vec::new())
}
