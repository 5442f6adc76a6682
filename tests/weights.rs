use atomic_weight::{
    Compound, DataLoadError, Element, ElementTable, Error, FormulaFault, weight_of_compound,
    weight_of_element,
};
use serde_json::Value;

const PRECISION: f64 = 0.01;

fn assert_weight(formula: &str, expected: f64) {
    let calculated = weight_of_compound(formula).unwrap();
    assert!(
        (expected - calculated).abs() < PRECISION,
        "{formula}: expected {expected}, got {calculated}"
    );
}

fn formula_fault(formula: &str) -> FormulaFault {
    match weight_of_compound(formula) {
        Err(Error::InvalidFormula(err)) => err.fault(),
        other => panic!("{formula}: expected an invalid formula, got {other:?}"),
    }
}

#[test]
fn every_bundled_element_matches_the_dataset() {
    let raw: Value =
        serde_json::from_str(include_str!("../resources/periodic_table.json")).unwrap();
    let records = raw["elements"].as_array().unwrap();
    assert_eq!(records.len(), ElementTable::get_default().len());

    for record in records {
        let symbol = record["symbol"].as_str().unwrap();
        let mass = record["atomic_mass"].as_f64().unwrap();
        let weight = weight_of_element(symbol).unwrap();
        assert!(weight.is_finite() && weight > 0.0, "{symbol}");
        assert_eq!(weight, mass, "{symbol}");
    }
}

#[test]
fn unknown_symbols_are_rejected() {
    for symbol in ["", "X", "o", "Oo", "Uuo", "HO", " O"] {
        match weight_of_element(symbol) {
            Err(Error::InvalidAtomicSymbol(err)) => assert_eq!(err.symbol(), symbol),
            other => panic!("{symbol:?}: expected an invalid symbol, got {other:?}"),
        }
    }
}

#[test]
fn trivial_formula() {
    assert_eq!(weight_of_compound("").unwrap(), 0.0);
}

#[test]
fn simple_formulas() {
    assert_weight("O2", 2.0 * 15.999);
    assert_weight("N2O2", 60.012);
    assert_weight("NaCl", 22.99 + 35.45);
    assert_weight("H2SO4", 98.072);
}

#[test]
fn weight_check_can_fail() {
    let calculated = weight_of_compound("O2").unwrap();
    assert!((1.0 - calculated).abs() >= PRECISION);
}

#[test]
fn explicit_count_of_one() {
    assert_eq!(formula_fault("O1"), FormulaFault::ExplicitCountOfOne);
}

#[test]
fn leading_count() {
    assert_eq!(formula_fault("2O"), FormulaFault::Unmatched);
}

#[test]
fn unknown_substance() {
    assert_eq!(formula_fault(",.!"), FormulaFault::Unmatched);
    assert_eq!(formula_fault("Xy2"), FormulaFault::Unmatched);
}

#[test]
fn longest_match_disambiguation() {
    let compound = Compound::parse("CaC").unwrap();
    let pairs: Vec<(&str, u32)> = compound
        .formula()
        .terms()
        .iter()
        .map(|t| (t.element().symbol(), t.count()))
        .collect();
    assert_eq!(pairs, vec![("Ca", 1), ("C", 1)]);
    assert_weight("CaC", 40.078 + 12.011);
}

#[test]
fn three_letter_symbol() {
    assert_weight("UueO", 315.0 + 15.999);

    let table = ElementTable::from_elements([
        Element::new("U", 238.03),
        Element::new("UUe", 300.0),
        Element::new("O", 15.999),
    ])
    .unwrap();
    let compound = Compound::new("UUeO", &table).unwrap();
    assert_eq!(compound.formula().len(), 2);
    assert!((compound.weight() - 315.999).abs() < PRECISION);
}

#[test]
fn custom_two_element_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("small_table.json");
    std::fs::write(
        &path,
        r#"{"elements": [
            {"symbol": "He", "atomic_mass": 4.0026, "name": "Helium"},
            {"symbol": "Li", "atomic_mass": 6.94, "name": "Lithium"}
        ]}"#,
    )
    .unwrap();

    let table = ElementTable::from_path(&path).unwrap();
    assert!(table.contains("He"));
    assert!(table.contains("Li"));
    assert!(!table.contains("O"));
    assert_eq!(table.len(), 2);

    let err = Compound::new("H2O", &table).unwrap_err();
    assert_eq!(err.fragment(), "H2O");
}

#[test]
fn duplicate_symbols_fail_to_load() {
    let json = r#"{"elements": [
        {"symbol": "O", "atomic_mass": 15.999},
        {"symbol": "O", "atomic_mass": 16.0}
    ]}"#;
    let err = ElementTable::from_json_str(json).unwrap_err();
    assert!(matches!(err, DataLoadError::DuplicateSymbol { index: 1, .. }));
}

#[test]
fn default_table_is_idempotent() {
    let first = ElementTable::get_default();
    let second = ElementTable::get_default();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn default_table_initializes_once_across_threads() {
    let addresses: Vec<usize> = (0..8)
        .map(|_| std::thread::spawn(|| ElementTable::get_default() as *const _ as usize))
        .collect::<Vec<_>>()
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    assert!(addresses.windows(2).all(|w| w[0] == w[1]));
}
