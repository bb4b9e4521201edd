//! Run configuration.

use serde::{Deserialize, Serialize};

/// Options controlling a single run.
///
/// The default places no bound on the number of steps, so an automaton with
/// an epsilon cycle runs forever. Setting `max_steps` halts such runs with
/// [`Halt::StepLimit`](crate::core::Halt::StepLimit) instead.
///
/// # Example
///
/// ```rust
/// use dpda::engine::RunOptions;
///
/// let options: RunOptions = serde_json::from_str(r#"{ "max_steps": 1000 }"#).unwrap();
/// assert_eq!(options, RunOptions::default().with_max_steps(1000));
///
/// let defaults: RunOptions = serde_json::from_str("{}").unwrap();
/// assert_eq!(defaults.max_steps, None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunOptions {
    /// Maximum number of transitions to apply before halting
    pub max_steps: Option<usize>,
}

impl RunOptions {
    /// Bound the number of steps.
    pub fn with_max_steps(mut self, limit: usize) -> Self {
        self.max_steps = Some(limit);
        self
    }
}
