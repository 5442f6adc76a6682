use super::table::ElementTable;
use crate::formula::{self, Formula, InvalidFormula};
use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::OnceLock;

/// A parsed formula together with its lazily computed molecular weight.
///
/// Parsing happens at construction; the weight is summed on the first call to
/// [`weight`](Compound::weight) and cached for the lifetime of the value.
#[derive(Debug, Clone)]
pub struct Compound {
    formula: Formula,
    weight: OnceLock<f64>,
}

impl Compound {
    /// Parses `formula` against `table`.
    pub fn new(formula: &str, table: &ElementTable) -> Result<Self, InvalidFormula> {
        Ok(Self {
            formula: formula::parse(formula, table)?,
            weight: OnceLock::new(),
        })
    }

    /// Parses `formula` against the default element table.
    pub fn parse(formula: &str) -> Result<Self, InvalidFormula> {
        Self::new(formula, ElementTable::get_default())
    }

    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    /// Sum of atomic weight times count over all terms; `0.0` when empty.
    pub fn weight(&self) -> f64 {
        *self.weight.get_or_init(|| {
            let total: f64 = self.formula.terms().iter().map(|t| t.weight()).sum();
            log::debug!("computed weight {total} for '{}'", self.formula);
            total
        })
    }

    pub fn composition(&self) -> BTreeMap<String, u64> {
        self.formula.composition()
    }

    /// Share of the total weight contributed by each element.
    ///
    /// Empty for an empty formula.
    pub fn mass_fractions(&self) -> BTreeMap<String, f64> {
        let total = self.weight();
        let mut fractions = BTreeMap::new();
        if total == 0.0 {
            return fractions;
        }
        for term in self.formula.terms() {
            *fractions
                .entry(term.element().symbol().to_string())
                .or_insert(0.0) += term.weight() / total;
        }
        fractions
    }
}

impl FromStr for Compound {
    type Err = InvalidFormula;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::FormulaFault;
    use crate::model::element::Element;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn empty_compound_weighs_nothing() {
        let c = Compound::parse("").unwrap();
        assert_eq!(c.weight(), 0.0);
        assert!(c.mass_fractions().is_empty());
    }

    #[test]
    fn oxygen_and_nitrogen_oxides() {
        assert!(approx_eq(Compound::parse("O2").unwrap().weight(), 31.998, 1e-9));
        assert!(approx_eq(Compound::parse("N2O2").unwrap().weight(), 60.012, 1e-9));
    }

    #[test]
    fn water() {
        let c: Compound = "H2O".parse().unwrap();
        assert!(approx_eq(c.weight(), 2.0 * 1.008 + 15.999, 1e-9));
        assert_eq!(c.formula().to_string(), "H2O");
    }

    #[test]
    fn weight_is_cached() {
        let c = Compound::parse("C6H12O6").unwrap();
        assert!(c.weight.get().is_none());
        let first = c.weight();
        assert_eq!(c.weight.get(), Some(&first));
        assert_eq!(c.weight(), first);
    }

    #[test]
    fn custom_table() {
        let table = ElementTable::from_elements([
            Element::new("A", 2.0),
            Element::new("Bb", 3.5),
        ])
        .unwrap();
        let c = Compound::new("A3BbA", &table).unwrap();
        assert!(approx_eq(c.weight(), 4.0 * 2.0 + 3.5, 1e-12));
        assert_eq!(c.composition().get("A"), Some(&4));
    }

    #[test]
    fn parse_errors_propagate() {
        let err = Compound::parse("O1").unwrap_err();
        assert_eq!(err.fault(), FormulaFault::ExplicitCountOfOne);
        assert!(Compound::parse("2O").is_err());
    }

    #[test]
    fn mass_fractions_sum_to_one() {
        let c = Compound::parse("CH3COOH").unwrap();
        let fractions = c.mass_fractions();
        assert_eq!(fractions.len(), 3);
        let sum: f64 = fractions.values().sum();
        assert!(approx_eq(sum, 1.0, 1e-12));

        let oxygen = 2.0 * 15.999 / c.weight();
        assert!(approx_eq(fractions["O"], oxygen, 1e-12));
    }
}
