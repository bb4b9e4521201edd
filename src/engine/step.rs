//! Step selection.
//!
//! Each step looks for a transition out of the current state by trying four
//! kinds of move in a fixed order. The first kind with a matching transition
//! wins. The table's determinism rules guarantee at most one match per kind.

use crate::core::{Stack, Symbol, Transition};
use std::fmt;

/// The kinds of move, listed in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Epsilon input, stack not inspected
    Epsilon,
    /// Epsilon input, pattern on top of the stack
    EpsilonReadStack,
    /// Next input symbol, stack not inspected
    Consume,
    /// Next input symbol, pattern on top of the stack
    ConsumeReadStack,
}

impl MoveKind {
    pub const PRIORITY: [MoveKind; 4] = [
        MoveKind::Epsilon,
        MoveKind::EpsilonReadStack,
        MoveKind::Consume,
        MoveKind::ConsumeReadStack,
    ];

    /// Moves of this kind advance the input position.
    pub fn consumes_input(self) -> bool {
        matches!(self, Self::Consume | Self::ConsumeReadStack)
    }

    pub fn reads_stack(self) -> bool {
        matches!(self, Self::EpsilonReadStack | Self::ConsumeReadStack)
    }

    /// Check whether `transition` is a move of this kind from the given
    /// next input symbol and stack.
    pub fn admits(self, transition: &Transition, next: Option<&Symbol>, stack: &Stack) -> bool {
        let input_matches = if self.consumes_input() {
            next.is_some_and(|symbol| transition.input.is_literal(symbol))
        } else {
            transition.input.is_epsilon()
        };

        let stack_matches = if self.reads_stack() {
            !transition.stack_top.is_empty() && stack.matches_top(&transition.stack_top)
        } else {
            transition.is_stack_epsilon()
        };

        input_matches && stack_matches
    }

    /// All transitions of this kind that could fire.
    pub fn candidates<'a>(
        self,
        transitions: &'a [Transition],
        next: Option<&Symbol>,
        stack: &Stack,
    ) -> Vec<&'a Transition> {
        transitions
            .iter()
            .filter(|t| self.admits(t, next, stack))
            .collect()
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Epsilon => "epsilon",
            Self::EpsilonReadStack => "epsilon/stack",
            Self::Consume => "input",
            Self::ConsumeReadStack => "input/stack",
        };
        f.write_str(text)
    }
}

/// Pick the transition to take, or `None` when the automaton is stuck.
///
/// Consuming kinds are only tried while input remains.
pub fn select<'a>(
    transitions: &'a [Transition],
    next: Option<&Symbol>,
    stack: &Stack,
) -> Option<(MoveKind, &'a Transition)> {
    MoveKind::PRIORITY.iter().find_map(|&kind| {
        if kind.consumes_input() && next.is_none() {
            return None;
        }
        transitions
            .iter()
            .find(|t| kind.admits(t, next, stack))
            .map(|t| (kind, t))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InputSymbol;

    fn seq(text: &str) -> Vec<Symbol> {
        text.chars().map(Symbol::from).collect()
    }

    fn t(input: Option<char>, top: &str, to: usize) -> Transition {
        let input = input.map_or(InputSymbol::Epsilon, InputSymbol::from);
        Transition::new(0, input, seq(top), to, vec![])
    }

    fn stack_of(text: &str) -> Stack {
        let mut stack = Stack::new();
        stack.apply(&[], &seq(text));
        stack
    }

    #[test]
    fn unconditional_epsilon_wins_first() {
        let moves = vec![t(None, "", 1)];
        let a = Symbol::from('a');
        let (kind, chosen) = select(&moves, Some(&a), &Stack::new()).unwrap();
        assert_eq!(kind, MoveKind::Epsilon);
        assert_eq!(chosen.to, 1);
    }

    #[test]
    fn epsilon_stack_read_precedes_input() {
        // Not insertable together, but selection must still prefer epsilon.
        let moves = vec![t(Some('a'), "A", 2), t(None, "A", 1)];
        let a = Symbol::from('a');
        let (kind, chosen) = select(&moves, Some(&a), &stack_of("A")).unwrap();
        assert_eq!(kind, MoveKind::EpsilonReadStack);
        assert_eq!(chosen.to, 1);
    }

    #[test]
    fn input_without_stack_precedes_input_with_stack() {
        let moves = vec![t(Some('a'), "A", 2), t(Some('a'), "", 1)];
        let a = Symbol::from('a');
        let (kind, chosen) = select(&moves, Some(&a), &stack_of("A")).unwrap();
        assert_eq!(kind, MoveKind::Consume);
        assert_eq!(chosen.to, 1);
    }

    #[test]
    fn stack_read_needs_pattern_on_stack() {
        let moves = vec![t(Some('a'), "A", 1)];
        let a = Symbol::from('a');
        assert!(select(&moves, Some(&a), &Stack::new()).is_none());
        assert!(select(&moves, Some(&a), &stack_of("B")).is_none());
        let (kind, _) = select(&moves, Some(&a), &stack_of("AB")).unwrap();
        assert_eq!(kind, MoveKind::ConsumeReadStack);
    }

    #[test]
    fn exhausted_input_only_allows_epsilon_moves() {
        let moves = vec![t(Some('a'), "", 1), t(None, "A", 2)];
        assert!(select(&moves, None, &Stack::new()).is_none());
        let (kind, _) = select(&moves, None, &stack_of("A")).unwrap();
        assert_eq!(kind, MoveKind::EpsilonReadStack);
    }

    #[test]
    fn wrong_input_symbol_is_stuck() {
        let moves = vec![t(Some('a'), "", 1)];
        let b = Symbol::from('b');
        assert!(select(&moves, Some(&b), &Stack::new()).is_none());
    }

    #[test]
    fn move_kind_flags() {
        assert!(!MoveKind::Epsilon.consumes_input());
        assert!(!MoveKind::EpsilonReadStack.consumes_input());
        assert!(MoveKind::Consume.consumes_input());
        assert!(MoveKind::ConsumeReadStack.reads_stack());
        assert!(!MoveKind::Consume.reads_stack());
    }

    #[test]
    fn candidates_lists_matches_of_one_kind() {
        let moves = vec![t(Some('a'), "A", 1), t(Some('a'), "B", 2), t(Some('b'), "A", 3)];
        let a = Symbol::from('a');
        let found = MoveKind::ConsumeReadStack.candidates(&moves, Some(&a), &stack_of("A"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].to, 1);
    }
}
