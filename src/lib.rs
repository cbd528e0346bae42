//! `teracada` provides a small numeric core for scripting hosts: an immutable numeric array with
//! summary statistics, and the traits used by the regression models built on top of it.
//!
//! ## The Big Picture
//!
//! The workspace is split like this:
//! - `teracada`, this crate, holds [`NumericArray`], host [`Value`]s, errors, regression metrics
//!   and the [`Fit`](traits::Fit)/[`Predict`](traits::Predict) traits
//! - `teracada-linear` implements ordinary least squares regression for a single predictor
//! - `teracada-host` translates host calls into the two crates above and back
//!
//! ## Example
//!
//! ```rust
//! use teracada::NumericArray;
//!
//! let arr = NumericArray::from_vec(vec![5., 20., 14., 32., 22., 38.]);
//! assert_eq!(arr.len(), 6);
//! assert_eq!(arr.get(2)?, 14.);
//! assert_eq!(arr.to_string(), "[5, 20, 14, 32, 22, 38]");
//! # Ok::<(), teracada::Error>(())
//! ```

pub mod array;
pub mod error;
mod float;
mod metrics_regression;
pub mod param_guard;
pub mod prelude;
pub mod traits;
mod value;

pub use array::NumericArray;
pub use error::{Error, Result};
pub use float::Float;
pub use param_guard::ParamGuard;
pub use value::Value;

/// Common metrics functions for regression
pub mod metrics {
    pub use crate::metrics_regression::Regression;
}
