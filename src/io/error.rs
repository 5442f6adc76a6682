use thiserror::Error;

/// Failure to load an element dataset.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("malformed element dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid element record #{index}: {details}")]
    InvalidRecord { index: usize, details: String },

    #[error("duplicate atomic symbol '{symbol}' in element record #{index}")]
    DuplicateSymbol { symbol: String, index: usize },
}

impl Error {
    pub fn invalid_record(index: usize, details: impl Into<String>) -> Self {
        Self::InvalidRecord {
            index,
            details: details.into(),
        }
    }

    pub fn duplicate_symbol(symbol: impl Into<String>, index: usize) -> Self {
        Self::DuplicateSymbol {
            symbol: symbol.into(),
            index,
        }
    }
}
