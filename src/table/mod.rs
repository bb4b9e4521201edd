//! Per-state transition storage with determinism enforcement.
//!
//! The table owns the declared alphabets and the transitions leaving each
//! state. Insertion is append-only: a transition is validated against the
//! alphabets and state range, checked for duplicates, and then checked against
//! the determinism rules in [`rules`] before it is stored.
//!
//! # Example
//!
//! ```rust
//! use dpda::core::{InputSymbol, Symbol, Transition};
//! use dpda::table::{TransitionError, TransitionTable};
//! use std::collections::BTreeSet;
//!
//! let input = BTreeSet::from([Symbol::new("a")]);
//! let stack = BTreeSet::from([Symbol::new("A")]);
//! let mut table = TransitionTable::new(2, input, stack);
//!
//! let push = Transition::new(0, InputSymbol::from("a"), vec![], 0, vec![Symbol::new("A")]);
//! table.insert(push).unwrap();
//!
//! let jump = Transition::new(0, InputSymbol::Epsilon, vec![], 1, vec![]);
//! assert!(matches!(
//!     table.insert(jump),
//!     Err(TransitionError::DeterminismViolation { state: 0, .. })
//! ));
//! assert_eq!(table.transitions_for(0).len(), 1);
//! ```

mod error;
pub mod rules;

pub use error::{SymbolRole, TransitionError};
pub use rules::{Conflict, ConflictCheck, ConflictKind};

use crate::core::{InputSymbol, Symbol, Transition};
use std::collections::BTreeSet;
use std::fmt;
use stillwater::validation::Validation;

/// Transitions of every state, indexed by source state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionTable {
    input_alphabet: BTreeSet<Symbol>,
    stack_alphabet: BTreeSet<Symbol>,
    by_state: Vec<Vec<Transition>>,
}

impl TransitionTable {
    /// Create an empty table for states `0..states`.
    pub fn new(
        states: usize,
        input_alphabet: BTreeSet<Symbol>,
        stack_alphabet: BTreeSet<Symbol>,
    ) -> Self {
        Self {
            input_alphabet,
            stack_alphabet,
            by_state: vec![Vec::new(); states],
        }
    }

    pub fn state_count(&self) -> usize {
        self.by_state.len()
    }

    pub fn input_alphabet(&self) -> &BTreeSet<Symbol> {
        &self.input_alphabet
    }

    pub fn stack_alphabet(&self) -> &BTreeSet<Symbol> {
        &self.stack_alphabet
    }

    /// Transitions leaving `state` in insertion order. Empty for an unknown state.
    pub fn transitions_for(&self, state: usize) -> &[Transition] {
        self.by_state.get(state).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All transitions, grouped by source state.
    pub fn iter(&self) -> impl Iterator<Item = &Transition> + '_ {
        self.by_state.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.by_state.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_state.iter().all(Vec::is_empty)
    }

    /// Check the states and symbols of `transition` against the declared
    /// state range and alphabets.
    pub fn validate(&self, transition: &Transition) -> Result<(), TransitionError> {
        let states = self.state_count();
        for state in [transition.from, transition.to] {
            if state >= states {
                return Err(TransitionError::InvalidState { state, states });
            }
        }

        if let InputSymbol::Literal(symbol) = &transition.input {
            if !self.input_alphabet.contains(symbol) {
                return Err(TransitionError::InvalidSymbol {
                    symbol: symbol.clone(),
                    role: SymbolRole::Input,
                });
            }
        }

        let stack_symbols = transition
            .stack_top
            .iter()
            .map(|s| (s, SymbolRole::StackTop))
            .chain(
                transition
                    .replacement
                    .iter()
                    .map(|s| (s, SymbolRole::Replacement)),
            );
        for (symbol, role) in stack_symbols {
            if !self.stack_alphabet.contains(symbol) {
                return Err(TransitionError::InvalidSymbol {
                    symbol: symbol.clone(),
                    role,
                });
            }
        }

        Ok(())
    }

    /// Every determinism conflict `transition` would have with the
    /// transitions already stored for its source state.
    pub fn conflicts(&self, transition: &Transition) -> ConflictCheck {
        rules::check(transition, self.transitions_for(transition.from))
    }

    /// Validate and append a transition.
    ///
    /// Fails with the first problem found: an invalid state or symbol, a
    /// duplicate of a stored transition, or the first stored transition it
    /// conflicts with.
    pub fn insert(&mut self, transition: Transition) -> Result<(), TransitionError> {
        if let Err(err) = self.admit(&transition) {
            tracing::debug!(
                %transition,
                from = transition.from,
                to = transition.to,
                error = %err,
                "rejected transition"
            );
            return Err(err);
        }

        tracing::debug!(
            %transition,
            from = transition.from,
            to = transition.to,
            "inserted transition"
        );
        self.by_state[transition.from].push(transition);
        Ok(())
    }

    fn admit(&self, transition: &Transition) -> Result<(), TransitionError> {
        self.validate(transition)?;

        let existing = self.transitions_for(transition.from);
        if let Some(duplicate) = existing.iter().find(|t| transition.duplicates(t)) {
            return Err(TransitionError::DuplicateTransition {
                state: transition.from,
                transition: duplicate.clone(),
            });
        }

        if let Validation::Failure(conflicts) = rules::check(transition, existing) {
            if let Some(conflict) = conflicts.iter().next() {
                return Err(conflict.clone().into());
            }
        }

        Ok(())
    }
}

impl fmt::Display for TransitionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (state, transitions) in self.by_state.iter().enumerate() {
            writeln!(f, "Transitions for state {state}:")?;
            for transition in transitions {
                writeln!(f, "{transition:#}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(text: &str) -> Vec<Symbol> {
        text.chars().map(Symbol::from).collect()
    }

    fn alphabet(text: &str) -> BTreeSet<Symbol> {
        text.chars().map(Symbol::from).collect()
    }

    fn table() -> TransitionTable {
        TransitionTable::new(3, alphabet("ab"), alphabet("AB"))
    }

    fn t(from: usize, input: Option<char>, top: &str, to: usize, push: &str) -> Transition {
        let input = input.map_or(InputSymbol::Epsilon, InputSymbol::from);
        Transition::new(from, input, seq(top), to, seq(push))
    }

    #[test]
    fn rejects_out_of_range_states() {
        let mut table = table();
        assert_eq!(
            table.insert(t(3, Some('a'), "", 0, "")),
            Err(TransitionError::InvalidState { state: 3, states: 3 })
        );
        assert_eq!(
            table.insert(t(0, Some('a'), "", 7, "")),
            Err(TransitionError::InvalidState { state: 7, states: 3 })
        );
        assert!(table.is_empty());
    }

    #[test]
    fn rejects_symbols_outside_alphabets() {
        let mut table = table();
        assert!(matches!(
            table.insert(t(0, Some('z'), "", 0, "")),
            Err(TransitionError::InvalidSymbol { role: SymbolRole::Input, .. })
        ));
        assert!(matches!(
            table.insert(t(0, Some('a'), "Z", 0, "")),
            Err(TransitionError::InvalidSymbol { role: SymbolRole::StackTop, .. })
        ));
        assert!(matches!(
            table.insert(t(0, Some('a'), "", 0, "Z")),
            Err(TransitionError::InvalidSymbol { role: SymbolRole::Replacement, .. })
        ));
        // input symbols are not stack symbols
        assert!(matches!(
            table.insert(t(0, Some('a'), "a", 0, "")),
            Err(TransitionError::InvalidSymbol { .. })
        ));
    }

    #[test]
    fn rejects_duplicates_before_determinism() {
        let mut table = table();
        table.insert(t(0, Some('a'), "A", 1, "B")).unwrap();
        assert!(matches!(
            table.insert(t(0, Some('a'), "A", 1, "B")),
            Err(TransitionError::DuplicateTransition { state: 0, .. })
        ));
    }

    #[test]
    fn unconditional_epsilon_excludes_other_moves_either_order() {
        let mut first = table();
        first.insert(t(0, None, "", 1, "")).unwrap();
        assert!(matches!(
            first.insert(t(0, Some('a'), "A", 1, "")),
            Err(TransitionError::DeterminismViolation {
                kind: ConflictKind::EpsilonMove,
                ..
            })
        ));

        let mut second = table();
        second.insert(t(0, Some('a'), "A", 1, "")).unwrap();
        assert!(matches!(
            second.insert(t(0, None, "", 1, "")),
            Err(TransitionError::DeterminismViolation {
                kind: ConflictKind::EpsilonMove,
                ..
            })
        ));
    }

    #[test]
    fn other_states_are_unaffected() {
        let mut table = table();
        table.insert(t(0, None, "", 1, "")).unwrap();
        table.insert(t(1, Some('a'), "", 2, "A")).unwrap();
        table.insert(t(1, Some('b'), "A", 2, "")).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.transitions_for(1).len(), 2);
    }

    #[test]
    fn error_names_state_and_existing_transition() {
        let mut table = table();
        table.insert(t(2, Some('a'), "A", 0, "")).unwrap();
        let err = table.insert(t(2, Some('a'), "", 1, "B")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Violation of DPDA due to mismatched stack transition from state 2: [a,A->eps,(0)]"
        );
    }

    #[test]
    fn conflicts_lists_every_offender() {
        let mut table = table();
        table.insert(t(0, Some('a'), "A", 0, "")).unwrap();
        table.insert(t(0, Some('b'), "A", 0, "")).unwrap();
        match table.conflicts(&t(0, None, "A", 1, "")) {
            Validation::Failure(conflicts) => {
                assert_eq!(conflicts.len(), 2);
                assert!(conflicts
                    .iter()
                    .all(|c| c.kind == ConflictKind::EpsilonInput));
            }
            Validation::Success(_) => panic!("Expected conflicts, got success"),
        }
    }

    #[test]
    fn preserves_insertion_order() {
        let mut table = table();
        let moves = [
            t(0, Some('b'), "B", 0, ""),
            t(0, Some('a'), "", 0, "A"),
            t(0, Some('b'), "A", 1, ""),
        ];
        for m in moves.iter().cloned() {
            table.insert(m).unwrap();
        }
        assert_eq!(table.transitions_for(0), &moves);
    }

    #[test]
    fn unknown_state_has_no_transitions() {
        assert!(table().transitions_for(99).is_empty());
    }

    #[test]
    fn display_dumps_every_state() {
        let mut table = TransitionTable::new(2, alphabet("("), alphabet("P"));
        table.insert(t(0, Some('('), "", 0, "P")).unwrap();
        assert_eq!(
            table.to_string(),
            "Transitions for state 0:\n[(,eps->P,(0)]\nTransitions for state 1:\n"
        );
    }
}
