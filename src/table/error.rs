//! Errors raised when inserting a transition.

use super::rules::{Conflict, ConflictKind};
use crate::core::{Symbol, Transition};
use std::fmt;
use thiserror::Error;

/// Slot of a transition a symbol was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolRole {
    Input,
    StackTop,
    Replacement,
}

impl fmt::Display for SymbolRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => f.write_str("input symbol"),
            Self::StackTop => f.write_str("stack top"),
            Self::Replacement => f.write_str("stack replacement"),
        }
    }
}

/// Errors that reject a transition. A rejected transition is not added.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Symbol '{symbol}' used as {role} is not in the declared alphabet")]
    InvalidSymbol { symbol: Symbol, role: SymbolRole },

    #[error("State {state} is out of range, automaton has {states} states")]
    InvalidState { state: usize, states: usize },

    #[error("Transition already exists from state {state}: {transition:#}")]
    DuplicateTransition { state: usize, transition: Transition },

    #[error("Violation of DPDA due to {kind} from state {state}: {existing:#}")]
    DeterminismViolation {
        state: usize,
        kind: ConflictKind,
        existing: Transition,
    },
}

impl From<Conflict> for TransitionError {
    fn from(conflict: Conflict) -> Self {
        Self::DeterminismViolation {
            state: conflict.existing.from,
            kind: conflict.kind,
            existing: conflict.existing,
        }
    }
}
