//! Macros for ergonomic automaton construction.

/// Build a `Vec<Symbol>` from string or char literals.
///
/// # Example
///
/// ```
/// use dpda::core::Symbol;
/// use dpda::symbols;
///
/// let pattern = symbols!["A", 'B'];
/// assert_eq!(pattern, vec![Symbol::new("A"), Symbol::new("B")]);
///
/// let empty = symbols![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! symbols {
    () => {
        ::std::vec::Vec::<$crate::core::Symbol>::new()
    };
    ($($symbol:expr),+ $(,)?) => {
        ::std::vec![$($crate::core::Symbol::from($symbol)),+]
    };
}

#[cfg(test)]
mod tests {
    use crate::core::Symbol;

    #[test]
    fn symbols_macro_builds_sequence() {
        let seq = symbols!["X", "Y", "Z"];
        assert_eq!(seq.len(), 3);
        assert_eq!(seq[0], Symbol::new("X"));
    }

    #[test]
    fn symbols_macro_accepts_mixed_literals() {
        let owned = String::from("S");
        assert_eq!(
            symbols!['a', "b", owned],
            vec![Symbol::new("a"), Symbol::new("b"), Symbol::new("S")]
        );
    }

    #[test]
    fn symbols_macro_supports_empty_and_trailing_comma() {
        assert!(symbols![].is_empty());
        assert_eq!(symbols!["P",].len(), 1);
    }
}
