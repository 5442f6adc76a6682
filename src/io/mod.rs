//! Reading element datasets.
//!
//! Datasets are JSON documents holding an `elements` array. Each record needs
//! a `symbol` and an `atomic_mass`; any other fields are ignored.

pub mod dataset;
pub mod error;

pub use error::Error;
