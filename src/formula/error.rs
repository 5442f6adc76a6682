use std::fmt;
use thiserror::Error;

/// What made a formula invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormulaFault {
    /// Text not covered by any known element symbol.
    Unmatched,
    /// A count written explicitly as one, as in `O1`.
    ExplicitCountOfOne,
    ZeroCount,
    CountOverflow,
}

impl fmt::Display for FormulaFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormulaFault::Unmatched => write!(f, "unmatched text"),
            FormulaFault::ExplicitCountOfOne => write!(f, "explicit count of one in"),
            FormulaFault::ZeroCount => write!(f, "zero count in"),
            FormulaFault::CountOverflow => write!(f, "count too large in"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid formula '{formula}': {fault} '{fragment}' at position {position}")]
pub struct InvalidFormula {
    formula: String,
    fragment: String,
    position: usize,
    fault: FormulaFault,
}

impl InvalidFormula {
    pub(crate) fn new(
        formula: &str,
        fault: FormulaFault,
        position: usize,
        fragment: impl Into<String>,
    ) -> Self {
        Self {
            formula: formula.to_string(),
            fragment: fragment.into(),
            position,
            fault,
        }
    }

    /// The complete formula text that failed to parse.
    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// The offending substring.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Byte offset of [`fragment`](Self::fragment) within the formula.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn fault(&self) -> FormulaFault {
        self.fault
    }
}
