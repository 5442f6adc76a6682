//! Chemical formula parsing.
//!
//! A formula is a concatenation of terms. Each term is a known atomic symbol
//! optionally followed by a decimal count of at least two; an omitted count
//! means one. Symbols are matched longest-first against the symbols of an
//! [`ElementTable`], so `CaC` reads as calcium then carbon.
//!
//! The terms must cover the input exactly. Any character that is not part
//! of a term is reported as an [`InvalidFormula`] carrying the unmatched
//! text and its byte position.
//!
//! # Examples
//!
//! ```
//! use atomic_weight::{ElementTable, formula};
//!
//! let table = ElementTable::get_default();
//! let parsed = formula::parse("CaCO3", table)?;
//!
//! let pairs: Vec<(&str, u32)> = parsed
//!     .terms()
//!     .iter()
//!     .map(|t| (t.element().symbol(), t.count()))
//!     .collect();
//! assert_eq!(pairs, vec![("Ca", 1), ("C", 1), ("O", 3)]);
//! # Ok::<(), atomic_weight::InvalidFormula>(())
//! ```

mod error;
mod scanner;

pub use error::{FormulaFault, InvalidFormula};

use crate::model::element::Element;
use crate::model::table::ElementTable;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Range;

/// Parses `text` into a [`Formula`] using the symbols of `table`.
pub fn parse(text: &str, table: &ElementTable) -> Result<Formula, InvalidFormula> {
    scanner::scan(text, table)
}

/// One symbol with its count, and the bytes of the source it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    element: Element,
    count: u32,
    span: Range<usize>,
}

impl Term {
    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    pub fn weight(&self) -> f64 {
        self.element.weight() * f64::from(self.count)
    }
}

/// A parsed formula: its terms in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    source: String,
    terms: Vec<Term>,
}

impl Formula {
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Total count per symbol; repeated symbols such as in `CH3CH3` are merged.
    pub fn composition(&self) -> BTreeMap<String, u64> {
        let mut totals = BTreeMap::new();
        for term in &self.terms {
            *totals
                .entry(term.element.symbol().to_string())
                .or_insert(0u64) += u64::from(term.count);
        }
        totals
    }

    pub fn atom_count(&self) -> u64 {
        self.terms.iter().map(|t| u64::from(t.count)).sum()
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
