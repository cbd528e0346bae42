//!
//! `teracada-linear` provides ordinary least squares regression for a single predictor on top of
//! [`teracada::NumericArray`].
//!
//! ## The Big Picture
//!
//! Hyper-parameters live in [`LinearRegression`] and are checked through
//! [`ParamGuard`](teracada::ParamGuard). Fitting them with [`Fit`](teracada::traits::Fit) yields an
//! immutable [`FittedLinearRegression`]. For callers which want a single object that starts
//! unfitted and is refitted over time, [`RegressionModel`] wraps both.
//!
//! ## Examples
//!
//! There is an usage example in the `examples/` directory. To run, use:
//!
//! ```bash
//! $ RUST_LOG=debug cargo run --example linear_regression
//! ```

mod error;
mod hyperparams;
mod model;
mod ols;

pub use error::*;
pub use hyperparams::*;
pub use model::*;
pub use ols::*;
