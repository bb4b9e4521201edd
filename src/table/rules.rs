//! Determinism rules checked when a transition is inserted.
//!
//! A candidate is compared against every transition already stored for its
//! source state. Each pairing yields at most one [`Conflict`], and all of them
//! are accumulated in a `Validation` instead of stopping at the first.

use crate::core::{overlaps, Transition};
use serde::{Deserialize, Serialize};
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of checking a candidate against a state's transitions.
pub type ConflictCheck = Validation<(), NonEmptyVec<Conflict>>;

/// Which rule two transitions break when they share a source state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConflictKind {
    /// One side moves without reading input or stack.
    EpsilonMove,
    /// One side reads no input and the stack patterns overlap.
    EpsilonInput,
    /// Same input, overlapping patterns, and one pattern is empty.
    MismatchedStack,
    /// Same input and overlapping non-empty patterns.
    SameInputAndStack,
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::EpsilonMove => "epsilon input/epsilon stack transition",
            Self::EpsilonInput => "epsilon input transition",
            Self::MismatchedStack => "mismatched stack transition",
            Self::SameInputAndStack => "multiple transitions for the same input and stack top",
        };
        f.write_str(text)
    }
}

/// A stored transition that a candidate cannot coexist with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub kind: ConflictKind,
    pub existing: Transition,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} from state {}: {:#}",
            self.kind, self.existing.from, self.existing
        )
    }
}

/// Decide whether `candidate` and `existing` could both fire from the same
/// configuration of their shared source state.
///
/// Rules are tried in order and the first that applies is reported:
/// 1. either side is an unconditional epsilon move;
/// 2. either side reads no input and the stack patterns overlap;
/// 3. both read the same input and the stack patterns overlap.
pub fn classify(candidate: &Transition, existing: &Transition) -> Option<ConflictKind> {
    if candidate.from != existing.from {
        return None;
    }

    if candidate.is_unconditional_epsilon() || existing.is_unconditional_epsilon() {
        return Some(ConflictKind::EpsilonMove);
    }

    let patterns_overlap = overlaps(&candidate.stack_top, &existing.stack_top);

    if (candidate.input.is_epsilon() || existing.input.is_epsilon()) && patterns_overlap {
        return Some(ConflictKind::EpsilonInput);
    }

    if candidate.input == existing.input && patterns_overlap {
        return if candidate.is_stack_epsilon() || existing.is_stack_epsilon() {
            Some(ConflictKind::MismatchedStack)
        } else {
            Some(ConflictKind::SameInputAndStack)
        };
    }

    None
}

/// Check a candidate against the transitions of its source state,
/// accumulating every conflict in insertion order.
pub fn check(candidate: &Transition, existing: &[Transition]) -> ConflictCheck {
    let checks: Vec<ConflictCheck> = existing
        .iter()
        .map(|t| match classify(candidate, t) {
            Some(kind) => Validation::fail(Conflict {
                kind,
                existing: t.clone(),
            }),
            None => Validation::success(()),
        })
        .collect();

    Validation::all_vec(checks).map(|_| ())
}
