//! An error when fitting or querying a linear model
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LinearError>;

/// An error when fitting or querying a linear model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinearError {
    #[error("predictor has {predictor} samples but response has {response}")]
    LengthMismatch { predictor: usize, response: usize },
    #[error("at least two samples needed, got {0}")]
    InsufficientSamples(usize),
    /// The predictor has no variance, the slope is undefined
    #[error("predictor has zero variance")]
    DegenerateInput,
    #[error("the model has not been fitted")]
    NotFitted,
    #[error("invalid variance threshold {0}")]
    InvalidVarianceThreshold(f32),
    #[error(transparent)]
    BaseCrate(#[from] teracada::Error),
}
