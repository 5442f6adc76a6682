use super::error::Error;
use crate::model::element::Element;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct Dataset {
    elements: Vec<ElementRecord>,
}

#[derive(Debug, Deserialize)]
struct ElementRecord {
    symbol: String,
    atomic_mass: f64,
}

pub fn parse_elements(json: &str) -> Result<Vec<Element>, Error> {
    let dataset: Dataset = serde_json::from_str(json)?;
    validate_records(dataset.elements)
}

pub fn read_elements<R: Read>(reader: R) -> Result<Vec<Element>, Error> {
    let dataset: Dataset = serde_json::from_reader(reader)?;
    validate_records(dataset.elements)
}

fn validate_records(records: Vec<ElementRecord>) -> Result<Vec<Element>, Error> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| validate_record(index, record))
        .collect()
}

fn validate_record(index: usize, record: ElementRecord) -> Result<Element, Error> {
    check_element(index, &record.symbol, record.atomic_mass)?;
    Ok(Element::new(record.symbol, record.atomic_mass))
}

/// Rejects symbols that are empty, non-alphabetic or lowercase-leading, and
/// masses that are not finite and positive.
pub(crate) fn check_element(index: usize, symbol: &str, atomic_mass: f64) -> Result<(), Error> {
    let mut chars = symbol.chars();
    match chars.next() {
        None => return Err(Error::invalid_record(index, "empty symbol")),
        Some(first) if !first.is_ascii_uppercase() => {
            return Err(Error::invalid_record(
                index,
                format!("symbol '{symbol}' must start with an uppercase ASCII letter"),
            ));
        }
        Some(_) => {}
    }
    if !chars.all(|c| c.is_ascii_alphabetic()) {
        return Err(Error::invalid_record(
            index,
            format!("symbol '{symbol}' contains non-alphabetic characters"),
        ));
    }

    if !atomic_mass.is_finite() || atomic_mass <= 0.0 {
        return Err(Error::invalid_record(
            index,
            format!("atomic mass {atomic_mass} of '{symbol}' is not a positive number"),
        ));
    }

    Ok(())
}
