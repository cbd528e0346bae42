#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use teracada::{Float, ParamGuard};

use crate::error::{LinearError, Result};

/// A verified hyper-parameter set ready for fitting a least squares line
///
/// See [`LinearRegression`](crate::LinearRegression) for more information.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct LinearRegressionValidParams<F> {
    fit_intercept: bool,
    variance_threshold: F,
}

impl<F: Float> Default for LinearRegressionValidParams<F> {
    fn default() -> Self {
        LinearRegression::new().0
    }
}

impl<F: Float> LinearRegressionValidParams<F> {
    pub fn fit_intercept(&self) -> bool {
        self.fit_intercept
    }

    pub fn variance_threshold(&self) -> F {
        self.variance_threshold
    }
}

/// Hyper-parameters of an ordinary least squares fit for one predictor
///
/// Fits the line `y = intercept + slope * x` which minimizes the residual sum of squares between
/// the observed responses and the line.
///
/// # Parameters
/// | Name | Default | Purpose | Range |
/// | :--- | :--- | :---| :--- |
/// | [with_intercept](Self::with_intercept) | `true` | Fit an intercept, otherwise the line passes through the origin | `false`, `true` |
/// | [variance_threshold](Self::variance_threshold) | `0.0` | Predictor variance at or below which the input counts as degenerate | `[0, inf)` |
///
/// # Errors
///
/// Returns [`InvalidVarianceThreshold`](LinearError::InvalidVarianceThreshold) if the threshold
/// is negative or not finite.
///
/// # Example
///
/// ```rust
/// use teracada::prelude::*;
/// use teracada_linear::{LinearError, LinearRegression};
///
/// let x = NumericArray::from_vec(vec![5., 15., 25., 35., 45., 55.]);
/// let y = NumericArray::from_vec(vec![5., 20., 14., 32., 22., 38.]);
///
/// // fit with an unchecked parameter set
/// let model = LinearRegression::<f64>::new().fit(&x, &y)?;
/// assert!((model.slope() - 0.54).abs() < 1e-9);
///
/// // or verify the parameters first
/// let params = LinearRegression::new().variance_threshold(1e-6f64).check()?;
/// let model = params.fit(&x, &y)?;
/// assert!((model.intercept() - 5.633333333).abs() < 1e-6);
/// # Ok::<(), LinearError>(())
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct LinearRegression<F = f64>(LinearRegressionValidParams<F>);

impl<F: Float> Default for LinearRegression<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure a linear regression
impl<F: Float> LinearRegression<F> {
    /// Create default hyper-parameters
    ///
    /// By default, an intercept will be fitted and only a predictor with exactly zero variance is
    /// rejected.
    pub fn new() -> LinearRegression<F> {
        Self(LinearRegressionValidParams {
            fit_intercept: true,
            variance_threshold: F::zero(),
        })
    }

    /// Configure the model to fit an intercept.
    /// Defaults to `true` if not set.
    pub fn with_intercept(mut self, fit_intercept: bool) -> Self {
        self.0.fit_intercept = fit_intercept;
        self
    }

    /// Set the population variance of the predictor at or below which the fit is refused with
    /// [`DegenerateInput`](LinearError::DegenerateInput).
    ///
    /// Defaults to `0.0` if not set
    pub fn variance_threshold(mut self, threshold: F) -> Self {
        self.0.variance_threshold = threshold;
        self
    }
}

impl<F: Float> ParamGuard for LinearRegression<F> {
    type Checked = LinearRegressionValidParams<F>;
    type Error = LinearError;

    /// Validate the hyper parameters
    fn check_ref(&self) -> Result<&Self::Checked> {
        let threshold = self.0.variance_threshold;
        if threshold.is_negative() || !threshold.is_finite() {
            Err(LinearError::InvalidVarianceThreshold(
                threshold.to_f32().unwrap_or(f32::NAN),
            ))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let params = LinearRegression::<f64>::new().check().unwrap();

        assert!(params.fit_intercept());
        assert_eq!(params.variance_threshold(), 0.);
        assert_eq!(LinearRegression::<f64>::default(), LinearRegression::new());
    }

    #[test]
    fn builder_sets_values() {
        let params = LinearRegression::new()
            .with_intercept(false)
            .variance_threshold(0.5f32)
            .check_unwrap();

        assert!(!params.fit_intercept());
        assert_eq!(params.variance_threshold(), 0.5);
    }

    #[test]
    fn rejects_negative_threshold() {
        let res = LinearRegression::new().variance_threshold(-1f64).check();
        assert_eq!(res, Err(LinearError::InvalidVarianceThreshold(-1.)));
    }

    #[test]
    fn rejects_non_finite_threshold() {
        let res = LinearRegression::new()
            .variance_threshold(f64::INFINITY)
            .check_ref()
            .map(|_| ());
        assert_eq!(res, Err(LinearError::InvalidVarianceThreshold(f32::INFINITY)));

        let res = LinearRegression::new().variance_threshold(f64::NAN).check();
        assert!(matches!(res, Err(LinearError::InvalidVarianceThreshold(_))));
    }
}
