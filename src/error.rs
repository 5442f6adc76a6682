use crate::formula::InvalidFormula;
use crate::io::Error as DataLoadError;
use crate::model::element::InvalidAtomicSymbol;
use thiserror::Error;

/// Any failure raised by the weight functions.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    InvalidAtomicSymbol(#[from] InvalidAtomicSymbol),

    #[error(transparent)]
    InvalidFormula(#[from] InvalidFormula),

    #[error("failed to load element data: {0}")]
    DataLoad(#[from] DataLoadError),
}
