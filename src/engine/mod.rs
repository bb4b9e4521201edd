//! Execution of a pushdown automaton over an input sequence.
//!
//! A run starts in the start state with an empty stack at input position 0.
//! At each step the engine picks a transition by [`MoveKind`] priority,
//! records the configuration, advances the input for consuming moves, rewrites
//! the stack and changes state. It halts when no transition applies, or when
//! an optional step limit from [`RunOptions`] is reached.
//!
//! Runs are synchronous and own their stack and trace; nothing is shared
//! between runs.

mod machine;
mod options;
mod step;

pub use machine::Dpda;
pub use options::RunOptions;
pub use step::{select, MoveKind};
