//! Prefix matching for stack-top patterns.
//!
//! Patterns and stack snapshots are read top-down: position 0 is the top of
//! the stack. Two sequences overlap when one is a prefix of the other. The
//! empty pattern overlaps everything.
//!
//! Only patterns of length 0 or 1 occur in practice, but the relation is
//! defined for any length and the determinism rules depend on it.

use super::symbol::Symbol;

/// Check whether one sequence is a prefix of the other.
///
/// # Example
///
/// ```rust
/// use dpda::core::{overlaps, Symbol};
///
/// let a = [Symbol::new("A")];
/// let ab = [Symbol::new("A"), Symbol::new("B")];
/// let b = [Symbol::new("B")];
///
/// assert!(overlaps(&a, &ab));
/// assert!(overlaps(&ab, &a));
/// assert!(overlaps(&[], &b));
/// assert!(!overlaps(&a, &b));
/// ```
pub fn overlaps(left: &[Symbol], right: &[Symbol]) -> bool {
    left.iter().zip(right).all(|(l, r)| l == r)
}
