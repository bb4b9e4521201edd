//! The automaton and its interpreter.

use crate::builder::{BuildError, DpdaBuilder};
use crate::core::{Configuration, Halt, InputSymbol, Stack, Symbol, Trace, Transition};
use crate::engine::options::RunOptions;
use crate::engine::step::select;
use crate::table::{TransitionError, TransitionTable};
use std::collections::BTreeSet;
use std::fmt;

/// A deterministic pushdown automaton.
///
/// States, alphabets and accepting states are fixed at construction. The
/// only mutation afterwards is transition insertion, which takes `&mut self`,
/// so runs (which borrow `&self`) can never overlap with it.
///
/// # Example
///
/// ```rust
/// use dpda::core::{tokenize, InputSymbol};
/// use dpda::{symbols, Dpda};
///
/// let mut dpda = Dpda::builder()
///     .states(1)
///     .input_alphabet(["(", ")"])
///     .stack_alphabet(["P"])
///     .accept([0])
///     .build()
///     .unwrap();
///
/// dpda.insert_transition(0, InputSymbol::from('('), symbols![], 0, symbols!["P"]).unwrap();
/// dpda.insert_transition(0, InputSymbol::from(')'), symbols!["P"], 0, symbols![]).unwrap();
///
/// assert!(dpda.run(&tokenize("(())")).is_accepted());
/// assert!(!dpda.run(&tokenize("(()")).is_accepted());
/// assert!(!dpda.run(&tokenize("())")).is_accepted());
/// ```
#[derive(Clone, Debug)]
pub struct Dpda {
    start: usize,
    accept_states: BTreeSet<usize>,
    table: TransitionTable,
    options: RunOptions,
}

impl Dpda {
    /// Create an automaton with states `0..states`.
    ///
    /// The stack alphabet defaults to the input alphabet; use
    /// [`Dpda::builder`] to declare a separate one.
    pub fn new<I, S, A>(
        states: usize,
        start: usize,
        input_alphabet: I,
        accept_states: A,
    ) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
        A: IntoIterator<Item = usize>,
    {
        DpdaBuilder::new()
            .states(states)
            .start(start)
            .input_alphabet(input_alphabet)
            .accept(accept_states)
            .build()
    }

    /// Start a fluent builder.
    pub fn builder() -> DpdaBuilder {
        DpdaBuilder::new()
    }

    pub(crate) fn from_parts(
        start: usize,
        accept_states: BTreeSet<usize>,
        table: TransitionTable,
        options: RunOptions,
    ) -> Self {
        Self {
            start,
            accept_states,
            table,
            options,
        }
    }

    pub fn start_state(&self) -> usize {
        self.start
    }

    pub fn state_count(&self) -> usize {
        self.table.state_count()
    }

    pub fn accept_states(&self) -> &BTreeSet<usize> {
        &self.accept_states
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// Options used by [`Dpda::run`].
    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    /// Validate and add the transition `(from, input, stack_top, to, replacement)`.
    pub fn insert_transition(
        &mut self,
        from: usize,
        input: impl Into<InputSymbol>,
        stack_top: Vec<Symbol>,
        to: usize,
        replacement: Vec<Symbol>,
    ) -> Result<(), TransitionError> {
        self.add_transition(Transition::new(
            from,
            input.into(),
            stack_top,
            to,
            replacement,
        ))
    }

    /// Validate and add a prepared transition.
    pub fn add_transition(&mut self, transition: Transition) -> Result<(), TransitionError> {
        self.table.insert(transition)
    }

    /// Transitions leaving `state`, in insertion order.
    pub fn transitions_for(&self, state: usize) -> &[Transition] {
        self.table.transitions_for(state)
    }

    /// Run with the automaton's own options.
    pub fn run(&self, input: &[Symbol]) -> Trace {
        self.run_with(input, &self.options)
    }

    /// Shorthand for `run(input).is_accepted()`.
    pub fn accepts(&self, input: &[Symbol]) -> bool {
        self.run(input).is_accepted()
    }

    /// Interpret `input`, recording a configuration before every step and a
    /// final one once no transition applies.
    ///
    /// Runs never fail. Unknown input symbols simply leave the automaton
    /// stuck.
    pub fn run_with(&self, input: &[Symbol], options: &RunOptions) -> Trace {
        let mut stack = Stack::new();
        let mut position = 0;
        let mut state = self.start;
        let mut configurations = Vec::new();

        let halt = loop {
            let next = input.get(position);
            let Some((kind, transition)) = select(self.table.transitions_for(state), next, &stack)
            else {
                break Halt::Stuck;
            };

            // Only a run that still has a move left is cut off.
            if let Some(limit) = options.max_steps {
                if configurations.len() >= limit {
                    tracing::warn!(limit, state, position, "run stopped at step limit");
                    break Halt::StepLimit { limit };
                }
            }

            tracing::trace!(
                state,
                position,
                %kind,
                %transition,
                "step"
            );

            configurations.push(Configuration {
                state,
                remaining_input: input[position..].to_vec(),
                stack: stack.snapshot(),
                transition: Some(transition.clone()),
            });

            if kind.consumes_input() {
                position += 1;
            }
            stack.apply(&transition.stack_top, &transition.replacement);
            state = transition.to;
        };

        let last = Configuration {
            state,
            remaining_input: input[position..].to_vec(),
            stack: stack.snapshot(),
            transition: None,
        };
        let accepted = halt == Halt::Stuck && last.is_accepting(&self.accept_states);
        let steps = configurations.len();
        configurations.push(last);

        tracing::debug!(%halt, steps, accepted, "run finished");
        Trace::new(configurations, halt, accepted)
    }
}

impl fmt::Display for Dpda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.table, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tokenize;
    use crate::symbols;

    fn balanced_parens() -> Dpda {
        let mut dpda = Dpda::builder()
            .states(2)
            .input_alphabet(["(", ")"])
            .stack_alphabet(["P"])
            .accept([0])
            .build()
            .unwrap();
        dpda.insert_transition(0, '(', symbols![], 0, symbols!["P"])
            .unwrap();
        dpda.insert_transition(0, ')', symbols!["P"], 0, symbols![])
            .unwrap();
        dpda
    }

    #[test]
    fn balanced_input_is_accepted() {
        let trace = balanced_parens().run(&tokenize("(())"));
        assert!(trace.is_accepted());
        assert_eq!(trace.halt(), Halt::Stuck);
        assert_eq!(trace.len(), 5);
        let last = trace.last().unwrap();
        assert!(last.stack.is_empty());
        assert_eq!(last.state, 0);
    }

    #[test]
    fn unclosed_input_is_rejected() {
        let trace = balanced_parens().run(&tokenize("(()"));
        assert!(!trace.is_accepted());
        let last = trace.last().unwrap();
        assert!(last.remaining_input.is_empty());
        assert_eq!(last.stack, symbols!["P"]);
    }

    #[test]
    fn extra_close_gets_stuck() {
        let trace = balanced_parens().run(&tokenize("())"));
        assert!(!trace.is_accepted());
        let last = trace.last().unwrap();
        assert_eq!(last.remaining_input, tokenize(")"));
        assert!(last.stack.is_empty());
    }

    #[test]
    fn empty_input_on_accepting_start_is_accepted() {
        let trace = balanced_parens().run(&[]);
        assert!(trace.is_accepted());
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.last().unwrap().to_string(), "(q0;eps;eps)");
    }

    #[test]
    fn epsilon_move_records_full_input_first() {
        let mut dpda = Dpda::new(2, 0, ["a", "b"], [1]).unwrap();
        dpda.insert_transition(0, InputSymbol::Epsilon, symbols![], 1, symbols![])
            .unwrap();

        let trace = dpda.run(&tokenize("ab"));
        let first = &trace.configurations()[0];
        assert_eq!(first.state, 0);
        assert_eq!(first.remaining_input, tokenize("ab"));
        assert!(first.transition.as_ref().unwrap().is_unconditional_epsilon());

        assert_eq!(trace.path(), vec![0, 1]);
        assert!(!trace.is_accepted());
    }

    #[test]
    fn configurations_snapshot_stack_before_step() {
        let trace = balanced_parens().run(&tokenize("()"));
        let rendered: Vec<String> = trace
            .configurations()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(rendered, vec!["(q0;();eps)", "(q0;);P)", "(q0;eps;eps)"]);
    }

    #[test]
    fn final_configuration_has_no_transition() {
        let trace = balanced_parens().run(&tokenize("()"));
        let (last, rest) = trace.configurations().split_last().unwrap();
        assert!(last.transition.is_none());
        assert!(rest.iter().all(|c| c.transition.is_some()));
    }

    #[test]
    fn step_limit_halts_epsilon_cycle() {
        let mut dpda = Dpda::new(2, 0, ["a"], [0, 1]).unwrap();
        dpda.insert_transition(0, InputSymbol::Epsilon, symbols![], 1, symbols![])
            .unwrap();
        dpda.insert_transition(1, InputSymbol::Epsilon, symbols![], 0, symbols![])
            .unwrap();

        let trace = dpda.run_with(&[], &RunOptions::default().with_max_steps(10));
        assert_eq!(trace.halt(), Halt::StepLimit { limit: 10 });
        assert_eq!(trace.len(), 11);
        assert!(!trace.is_accepted());
    }

    #[test]
    fn run_finishing_exactly_at_limit_is_not_cut_off() {
        let dpda = balanced_parens();
        let trace = dpda.run_with(&tokenize("()"), &RunOptions::default().with_max_steps(2));
        assert_eq!(trace.halt(), Halt::Stuck);
        assert!(trace.is_accepted());
        assert_eq!(trace.steps().count(), 2);

        let one_short = dpda.run_with(&tokenize("()"), &RunOptions::default().with_max_steps(1));
        assert_eq!(one_short.halt(), Halt::StepLimit { limit: 1 });
        assert!(!one_short.is_accepted());
    }

    #[test]
    fn zero_step_limit_still_accepts_when_no_move_applies() {
        let trace = balanced_parens().run_with(&[], &RunOptions::default().with_max_steps(0));
        assert_eq!(trace.halt(), Halt::Stuck);
        assert!(trace.is_accepted());
        assert_eq!(trace.len(), 1);
    }

    #[test]
    fn default_options_come_from_builder() {
        let dpda = Dpda::builder()
            .states(1)
            .run_options(RunOptions::default().with_max_steps(3))
            .build()
            .unwrap();
        assert_eq!(dpda.options().max_steps, Some(3));
    }

    #[test]
    fn unknown_input_symbol_gets_stuck() {
        let trace = balanced_parens().run(&tokenize("(x)"));
        assert!(!trace.is_accepted());
        assert_eq!(trace.last().unwrap().remaining_input, tokenize("x)"));
    }

    #[test]
    fn reruns_are_identical() {
        let dpda = balanced_parens();
        let input = tokenize("(()())");
        assert_eq!(dpda.run(&input), dpda.run(&input));
    }

    #[test]
    fn epsilon_moves_continue_after_input_is_exhausted() {
        // 0 --a/push A--> 1 --eps/pop A--> 2 (accepting)
        let mut dpda = Dpda::builder()
            .states(3)
            .input_alphabet(["a"])
            .stack_alphabet(["A"])
            .accept([2])
            .build()
            .unwrap();
        dpda.insert_transition(0, 'a', symbols![], 1, symbols!["A"])
            .unwrap();
        dpda.insert_transition(1, InputSymbol::Epsilon, symbols!["A"], 2, symbols![])
            .unwrap();

        let trace = dpda.run(&tokenize("a"));
        assert!(trace.is_accepted());
        assert_eq!(trace.path(), vec![0, 1, 2]);
        let second = &trace.configurations()[1];
        assert!(second.remaining_input.is_empty());
        assert_eq!(second.stack, symbols!["A"]);
    }

    #[test]
    fn display_dumps_table() {
        let rendered = balanced_parens().to_string();
        assert!(rendered.starts_with("Transitions for state 0:\n[(,eps->P,(0)]\n[),P->eps,(0)]\n"));
    }
}
