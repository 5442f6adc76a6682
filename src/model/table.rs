//! The element lookup table.
//!
//! An [`ElementTable`] maps atomic symbols to [`Element`] values. Tables are
//! built once from a dataset and are read-only afterwards. A process-wide
//! default table backed by the bundled periodic table is available through
//! [`ElementTable::get_default`].

use super::element::{Element, InvalidAtomicSymbol};
use crate::io::dataset;
use crate::io::error::Error;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::OnceLock;

const DEFAULT_TABLE_JSON: &str = include_str!("../../resources/periodic_table.json");

static DEFAULT_TABLE: OnceLock<ElementTable> = OnceLock::new();

/// Symbol to element mapping used to resolve formulas.
///
/// Besides the map itself the table keeps its symbols ordered by descending
/// length, which is the candidate order for longest-match tokenization.
#[derive(Debug, Clone)]
pub struct ElementTable {
    elements: HashMap<String, Element>,
    candidates: Vec<String>,
}

impl ElementTable {
    /// Builds a table from elements.
    ///
    /// Fails on the first element with an invalid symbol or mass, and on the
    /// first repeated symbol.
    pub fn from_elements<I>(elements: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Element>,
    {
        let mut map = HashMap::new();
        for (index, element) in elements.into_iter().enumerate() {
            dataset::check_element(index, element.symbol(), element.weight())?;
            if map.contains_key(element.symbol()) {
                return Err(Error::duplicate_symbol(element.symbol(), index));
            }
            map.insert(element.symbol().to_string(), element);
        }

        let mut candidates: Vec<String> = map.keys().cloned().collect();
        candidates.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        log::debug!("built element table with {} symbols", map.len());

        Ok(Self {
            elements: map,
            candidates,
        })
    }

    /// Loads a table from a JSON document with an `elements` array.
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        Self::from_elements(dataset::parse_elements(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        Self::from_elements(dataset::read_elements(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        log::debug!("loading element table from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Returns the shared table backed by the bundled periodic table.
    ///
    /// The table is parsed on first use; every later call returns the same
    /// instance.
    pub fn get_default() -> &'static ElementTable {
        DEFAULT_TABLE.get_or_init(|| {
            log::debug!("initializing default element table");
            Self::from_json_str(DEFAULT_TABLE_JSON)
                .expect("Failed to parse embedded periodic table. This is a library bug.")
        })
    }

    pub fn lookup(&self, symbol: &str) -> Result<&Element, InvalidAtomicSymbol> {
        self.elements
            .get(symbol)
            .ok_or_else(|| InvalidAtomicSymbol::new(symbol))
    }

    pub fn weight(&self, symbol: &str) -> Result<f64, InvalidAtomicSymbol> {
        self.lookup(symbol).map(Element::weight)
    }

    #[inline]
    pub fn contains(&self, symbol: &str) -> bool {
        self.elements.contains_key(symbol)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates over all symbols, longest first.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(String::as_str)
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    /// Longest known symbol that `text` starts with.
    pub(crate) fn match_prefix(&self, text: &str) -> Option<&Element> {
        self.candidates
            .iter()
            .find(|symbol| text.starts_with(symbol.as_str()))
            .and_then(|symbol| self.elements.get(symbol))
    }
}
