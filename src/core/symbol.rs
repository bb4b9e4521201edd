//! Alphabet symbols and the epsilon sentinel.
//!
//! A [`Symbol`] is an immutable label shared by the input alphabet and the
//! stack alphabet. Inputs to a transition are wrapped in [`InputSymbol`], whose
//! `Epsilon` variant marks a move that consumes nothing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text used to render an empty or epsilon slot.
pub const EPSILON_TEXT: &str = "eps";

/// An atomic alphabet label with value equality.
///
/// # Example
///
/// ```rust
/// use dpda::core::Symbol;
///
/// let open = Symbol::new("(");
/// assert_eq!(open, Symbol::from('('));
/// assert_eq!(open.as_str(), "(");
/// assert_eq!(open.to_string(), "(");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol from any string-like value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<char> for Symbol {
    fn from(value: char) -> Self {
        Self(value.to_string())
    }
}

/// The input slot of a transition: either a concrete symbol or epsilon.
///
/// Equality is structural, so a literal symbol spelled `"eps"` is never
/// confused with [`InputSymbol::Epsilon`].
///
/// # Example
///
/// ```rust
/// use dpda::core::{InputSymbol, Symbol};
///
/// let eps = InputSymbol::Epsilon;
/// let lit = InputSymbol::from("eps");
///
/// assert!(eps.is_epsilon());
/// assert!(!lit.is_epsilon());
/// assert_ne!(eps, lit);
/// assert!(lit.is_literal(&Symbol::new("eps")));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum InputSymbol {
    /// No input is consumed.
    Epsilon,
    /// A symbol from the input alphabet.
    Literal(Symbol),
}

impl InputSymbol {
    /// Check whether this is the epsilon sentinel.
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Self::Epsilon)
    }

    /// Check whether this is the given concrete symbol.
    pub fn is_literal(&self, symbol: &Symbol) -> bool {
        matches!(self, Self::Literal(s) if s == symbol)
    }

    /// The concrete symbol, if any.
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Self::Epsilon => None,
            Self::Literal(s) => Some(s),
        }
    }
}

impl fmt::Display for InputSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Epsilon => f.write_str(EPSILON_TEXT),
            Self::Literal(s) => fmt::Display::fmt(s, f),
        }
    }
}

impl From<Symbol> for InputSymbol {
    fn from(value: Symbol) -> Self {
        Self::Literal(value)
    }
}

impl From<&str> for InputSymbol {
    fn from(value: &str) -> Self {
        Self::Literal(Symbol::new(value))
    }
}

impl From<char> for InputSymbol {
    fn from(value: char) -> Self {
        Self::Literal(Symbol::from(value))
    }
}

/// Split a string into one input symbol per character.
///
/// ```rust
/// use dpda::core::{tokenize, Symbol};
///
/// let input = tokenize("(()");
/// assert_eq!(input, vec![Symbol::from('('), Symbol::from('('), Symbol::from(')')]);
/// ```
pub fn tokenize(text: &str) -> Vec<Symbol> {
    text.chars().map(Symbol::from).collect()
}

/// Render a sequence of symbols concatenated, or `eps` when empty.
pub(crate) fn write_sequence<'a>(
    f: &mut fmt::Formatter<'_>,
    symbols: impl IntoIterator<Item = &'a Symbol>,
) -> fmt::Result {
    let mut empty = true;
    for symbol in symbols {
        empty = false;
        fmt::Display::fmt(symbol, f)?;
    }
    if empty {
        f.write_str(EPSILON_TEXT)?;
    }
    Ok(())
}
