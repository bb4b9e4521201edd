//! Builder for constructing automata.

use crate::builder::error::BuildError;
use crate::core::{Symbol, Transition};
use crate::engine::{Dpda, RunOptions};
use crate::table::TransitionTable;
use std::collections::BTreeSet;

/// Builder for constructing a [`Dpda`] with a fluent API.
#[derive(Clone, Debug, Default)]
pub struct DpdaBuilder {
    states: Option<usize>,
    start: usize,
    input_alphabet: BTreeSet<Symbol>,
    stack_alphabet: Option<BTreeSet<Symbol>>,
    accept: BTreeSet<usize>,
    transitions: Vec<Transition>,
    options: RunOptions,
}

impl DpdaBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of states (required, must be positive).
    pub fn states(mut self, count: usize) -> Self {
        self.states = Some(count);
        self
    }

    /// Set the start state. Defaults to 0.
    pub fn start(mut self, state: usize) -> Self {
        self.start = state;
        self
    }

    /// Add symbols to the input alphabet.
    pub fn input_alphabet<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.input_alphabet
            .extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Add symbols to the stack alphabet.
    /// If never called, the stack alphabet is the input alphabet.
    pub fn stack_alphabet<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.stack_alphabet
            .get_or_insert_with(BTreeSet::new)
            .extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Mark states as accepting.
    pub fn accept<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        self.accept.extend(states);
        self
    }

    /// Queue a transition; it is validated by `build`.
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Queue several transitions at once.
    pub fn transitions(mut self, transitions: impl IntoIterator<Item = Transition>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Set the default run options.
    pub fn run_options(mut self, options: RunOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the automaton.
    /// Returns an error if the states are invalid or a queued transition is rejected.
    pub fn build(self) -> Result<Dpda, BuildError> {
        let states = match self.states {
            Some(n) if n > 0 => n,
            _ => return Err(BuildError::NoStates),
        };

        if self.start >= states {
            return Err(BuildError::InvalidStartState {
                start: self.start,
                states,
            });
        }

        if let Some(&state) = self.accept.iter().find(|&&s| s >= states) {
            return Err(BuildError::InvalidAcceptState { state, states });
        }

        let stack_alphabet = self
            .stack_alphabet
            .unwrap_or_else(|| self.input_alphabet.clone());
        let mut table = TransitionTable::new(states, self.input_alphabet, stack_alphabet);
        for transition in self.transitions {
            table.insert(transition)?;
        }

        Ok(Dpda::from_parts(self.start, self.accept, table, self.options))
    }
}
