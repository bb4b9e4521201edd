//! Configurations and the trace of a run.
//!
//! A run records one [`Configuration`] before every step it takes, plus a
//! final configuration once it halts. The ordered list, together with the
//! reason the run halted, forms a [`Trace`].

use super::symbol::{write_sequence, Symbol};
use super::transition::Transition;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Snapshot of a run taken immediately before a step is applied.
///
/// The final configuration of a run carries `transition: None`.
///
/// # Example
///
/// ```rust
/// use dpda::core::{tokenize, Configuration, Symbol};
/// use std::collections::BTreeSet;
///
/// let config = Configuration {
///     state: 0,
///     remaining_input: tokenize("()"),
///     stack: vec![Symbol::new("P")],
///     transition: None,
/// };
///
/// assert_eq!(config.to_string(), "(q0;();P)");
/// assert!(!config.is_accepting(&BTreeSet::from([0])));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Configuration {
    /// Current automaton state
    pub state: usize,
    /// Input from the current position to the end
    pub remaining_input: Vec<Symbol>,
    /// Stack contents before the step, top first
    pub stack: Vec<Symbol>,
    /// Move taken from this configuration
    pub transition: Option<Transition>,
}

impl Configuration {
    /// Input is exhausted and the state is accepting.
    pub fn is_accepting(&self, accept_states: &BTreeSet<usize>) -> bool {
        self.remaining_input.is_empty() && accept_states.contains(&self.state)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(q{};", self.state)?;
        write_sequence(f, &self.remaining_input)?;
        f.write_str(";")?;
        write_sequence(f, &self.stack)?;
        f.write_str(")")
    }
}

/// Why a run stopped.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Halt {
    /// No transition matched the last configuration.
    Stuck,
    /// The configured step limit was reached.
    StepLimit { limit: usize },
}

impl fmt::Display for Halt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stuck => f.write_str("stuck"),
            Self::StepLimit { limit } => write!(f, "step limit {limit} reached"),
        }
    }
}

/// Ordered configurations visited by one run, from the initial
/// configuration to the final one inclusive.
///
/// A trace always holds at least the final configuration.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Trace {
    configurations: Vec<Configuration>,
    halt: Halt,
    accepted: bool,
}

impl Trace {
    pub(crate) fn new(configurations: Vec<Configuration>, halt: Halt, accepted: bool) -> Self {
        Self {
            configurations,
            halt,
            accepted,
        }
    }

    /// All configurations in order.
    pub fn configurations(&self) -> &[Configuration] {
        &self.configurations
    }

    /// The final configuration.
    pub fn last(&self) -> Option<&Configuration> {
        self.configurations.last()
    }

    pub fn halt(&self) -> Halt {
        self.halt
    }

    /// Verdict of the run.
    ///
    /// True when the run got stuck with no remaining input in an accepting
    /// state. A run cut off by a step limit is never accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    pub fn len(&self) -> usize {
        self.configurations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configurations.is_empty()
    }

    /// Transitions taken, in order.
    pub fn steps(&self) -> impl Iterator<Item = &Transition> + '_ {
        self.configurations
            .iter()
            .filter_map(|c| c.transition.as_ref())
    }

    /// Sequence of states visited.
    pub fn path(&self) -> Vec<usize> {
        self.configurations.iter().map(|c| c.state).collect()
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for config in &self.configurations {
            match &config.transition {
                Some(t) => writeln!(f, "{config} {t:#}")?,
                None => writeln!(f, "{config}")?,
            }
        }
        Ok(())
    }
}
