use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid or unknown atomic symbol: '{0}'")]
pub struct InvalidAtomicSymbol(pub(crate) String);

impl InvalidAtomicSymbol {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    pub fn symbol(&self) -> &str {
        &self.0
    }
}

/// A chemical element as recorded in an [`ElementTable`](crate::ElementTable).
///
/// Two elements compare equal when their symbols match; the weight does not
/// take part in equality or hashing.
#[derive(Debug, Clone)]
pub struct Element {
    symbol: String,
    weight: f64,
}

impl Element {
    pub fn new(symbol: impl Into<String>, weight: f64) -> Self {
        Self {
            symbol: symbol.into(),
            weight,
        }
    }

    #[inline]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl Eq for Element {}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbol.hash(state);
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn element_accessors() {
        let e = Element::new("O", 15.999);
        assert_eq!(e.symbol(), "O");
        assert_eq!(e.weight(), 15.999);
        assert_eq!(e.to_string(), "O");
    }

    #[test]
    fn identity_is_by_symbol() {
        let a = Element::new("Na", 22.99);
        let b = Element::new("Na", 23.0);
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        assert_eq!(set.len(), 1);

        assert_ne!(Element::new("Na", 22.99), Element::new("N", 22.99));
    }

    #[test]
    fn invalid_symbol_message() {
        let err = InvalidAtomicSymbol::new("X");
        assert_eq!(err.symbol(), "X");
        assert_eq!(err.to_string(), "invalid or unknown atomic symbol: 'X'");
    }
}
