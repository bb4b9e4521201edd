//! DPDA: a deterministic pushdown automaton
//!
//! A finite-state machine with an unbounded stack, recognizing
//! context-free languages deterministically. Transitions are validated as
//! they are inserted so that at most one move ever applies, and runs produce a
//! full trace of the configurations they visit.
//!
//! # Core Concepts
//!
//! - **Symbols**: Alphabet labels plus an explicit epsilon input
//! - **Transition table**: Per-state moves with determinism checks on insertion
//! - **Engine**: A priority-ordered interpreter that records every configuration
//!
//! # Example
//!
//! ```rust
//! use dpda::builder::{pop_transition, push_transition};
//! use dpda::core::tokenize;
//! use dpda::Dpda;
//!
//! let dpda = Dpda::builder()
//!     .states(1)
//!     .input_alphabet(["(", ")"])
//!     .stack_alphabet(["P"])
//!     .accept([0])
//!     .transition(push_transition(0, "(", 0, ["P"]))
//!     .transition(pop_transition(0, ")", "P", 0))
//!     .build()
//!     .unwrap();
//!
//! let trace = dpda.run(&tokenize("(())"));
//! assert!(trace.is_accepted());
//! assert_eq!(trace.configurations()[0].to_string(), "(q0;(());eps)");
//! assert_eq!(trace.last().unwrap().to_string(), "(q0;eps;eps)");
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod table;

// Re-export commonly used types
pub use builder::{BuildError, DpdaBuilder};
pub use self::core::{Configuration, Halt, InputSymbol, Symbol, Trace, Transition};
pub use engine::{Dpda, RunOptions};
pub use table::{TransitionError, TransitionTable};
