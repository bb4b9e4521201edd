//! Core automaton data types.
//!
//! This module contains the plain data the table and engine operate on:
//! - Symbols and the epsilon sentinel
//! - Prefix matching of stack patterns
//! - The run-time stack
//! - Transitions, configurations and traces
//!
//! Nothing here holds automaton-wide state; the types are values that can be
//! cloned, compared and serialized freely.

mod configuration;
mod pattern;
mod stack;
mod symbol;
mod transition;

pub use configuration::{Configuration, Halt, Trace};
pub use pattern::overlaps;
pub use stack::Stack;
pub use symbol::{tokenize, InputSymbol, Symbol, EPSILON_TEXT};
pub use transition::Transition;
