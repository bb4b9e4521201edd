//! Build errors for automaton construction.

use crate::table::TransitionError;
use thiserror::Error;

/// Errors that can occur when building an automaton.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("No states declared. Call .states(n) with n > 0 before .build()")]
    NoStates,

    #[error("Start state {start} is out of range, automaton has {states} states")]
    InvalidStartState { start: usize, states: usize },

    #[error("Accepting state {state} is out of range, automaton has {states} states")]
    InvalidAcceptState { state: usize, states: usize },

    #[error("Transition rejected: {0}")]
    Transition(#[from] TransitionError),
}
