//! Error types in Teracada
//!

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A non-numeric value was supplied where a number was expected
    #[error("expected a numeric value at index {index}, found {found}")]
    TypeMismatch { index: usize, found: &'static str },
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: isize, len: usize },
    #[error("not enough samples to compute the statistic")]
    NotEnoughSamples,
    #[error("mismatched shapes {0} and {1}")]
    MismatchedShapes(usize, usize),
    #[error("invalid parameter {0}")]
    Parameters(String),
}
