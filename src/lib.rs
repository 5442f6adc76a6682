//! Molecular weights of chemical formulas, computed from a periodic table
//! dataset.
//!
//! Formulas follow a deliberately small grammar: a sequence of atomic symbols,
//! each optionally followed by a count of two or more. Symbols are matched
//! longest-first against an [`ElementTable`], and every character of the input
//! must belong to some term.
//!
//! # Quick Start
//!
//! ```
//! use atomic_weight::{weight_of_compound, weight_of_element, Error};
//!
//! let oxygen = weight_of_element("O")?;
//! assert!((oxygen - 15.999).abs() < 1e-9);
//!
//! let glucose = weight_of_compound("C6H12O6")?;
//! assert!((glucose - 180.156).abs() < 1e-3);
//!
//! // An explicit count of one is rejected.
//! assert!(matches!(weight_of_compound("O1"), Err(Error::InvalidFormula(_))));
//! # Ok::<(), Error>(())
//! ```
//!
//! # Custom Tables
//!
//! The bundled table is shared process-wide through
//! [`ElementTable::get_default`]. Other datasets can be loaded with
//! [`ElementTable::from_json_str`], [`ElementTable::from_reader`] or
//! [`ElementTable::from_path`] and passed to [`Compound::new`]:
//!
//! ```
//! use atomic_weight::{Compound, ElementTable};
//!
//! let table = ElementTable::from_json_str(
//!     r#"{"elements": [{"symbol": "He", "atomic_mass": 4.0026},
//!                      {"symbol": "Li", "atomic_mass": 6.94}]}"#,
//! )?;
//! assert_eq!(table.len(), 2);
//!
//! let compound = Compound::new("LiHe2", &table).unwrap();
//! assert!((compound.weight() - (6.94 + 2.0 * 4.0026)).abs() < 1e-9);
//! # Ok::<(), atomic_weight::DataLoadError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`formula`] — Formula grammar, tokenizer and parsed [`Formula`] values
//! - [`io`] — Element dataset loading

mod error;
mod model;

pub mod formula;
pub mod io;

pub use error::Error;
pub use formula::{Formula, FormulaFault, InvalidFormula, Term};
pub use io::Error as DataLoadError;
pub use model::compound::Compound;
pub use model::element::{Element, InvalidAtomicSymbol};
pub use model::table::ElementTable;

/// Atomic weight of `symbol` in the default table.
pub fn weight_of_element(symbol: &str) -> Result<f64, Error> {
    Ok(ElementTable::get_default().weight(symbol)?)
}

/// Molecular weight of `formula` computed against the default table.
pub fn weight_of_compound(formula: &str) -> Result<f64, Error> {
    Ok(Compound::parse(formula)?.weight())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_weight() {
        assert_eq!(weight_of_element("O").unwrap(), 15.999);
        assert!(matches!(
            weight_of_element("Xx"),
            Err(Error::InvalidAtomicSymbol(_))
        ));
    }

    #[test]
    fn compound_weight() {
        assert_eq!(weight_of_compound("").unwrap(), 0.0);
        assert!(matches!(
            weight_of_compound("2O"),
            Err(Error::InvalidFormula(_))
        ));
    }
}
