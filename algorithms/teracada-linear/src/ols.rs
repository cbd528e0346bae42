//! Ordinary Least Squares
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use teracada::metrics::Regression;
use teracada::traits::{Fit, Predict};
use teracada::{Float, NumericArray};

use crate::error::{LinearError, Result};
use crate::hyperparams::LinearRegressionValidParams;

/// A fitted least squares line which can be used for making predictions.
///
/// Obtained from [`LinearRegression`](crate::LinearRegression) with [`Fit::fit`]. The fitted
/// coefficients never change, fitting again produces a new value.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct FittedLinearRegression<F> {
    intercept: F,
    slope: F,
    n_samples: usize,
}

impl<F: Float> Fit<NumericArray<F>, NumericArray<F>, LinearError>
    for LinearRegressionValidParams<F>
{
    type Object = FittedLinearRegression<F>;

    /// Fit a line given the `predictor` samples and the `response` samples
    ///
    /// Both arrays need the same length of at least two, and the predictor must not be constant.
    /// The coefficients are computed from mean-centered data:
    ///
    /// ```ignore
    /// slope = sum((x_i - mean_x) * (y_i - mean_y)) / sum((x_i - mean_x)^2)
    /// intercept = mean_y - slope * mean_x
    /// ```
    ///
    /// Without an intercept the line passes through the origin and
    /// `slope = sum(x_i * y_i) / sum(x_i^2)`.
    fn fit(
        &self,
        predictor: &NumericArray<F>,
        response: &NumericArray<F>,
    ) -> Result<Self::Object> {
        let n_samples = predictor.len();
        if n_samples != response.len() {
            return Err(LinearError::LengthMismatch {
                predictor: n_samples,
                response: response.len(),
            });
        }
        if n_samples < 2 {
            return Err(LinearError::InsufficientSamples(n_samples));
        }

        log::debug!(
            "fitting least squares line on {} samples (intercept: {})",
            n_samples,
            self.fit_intercept()
        );

        let (mean_x, mean_y) = if self.fit_intercept() {
            (predictor.mean()?, response.mean()?)
        } else {
            (F::zero(), F::zero())
        };

        // deviations are divided by their largest magnitude so squaring neither overflows nor
        // underflows, the sums below are those of the scaled deviations
        let scale = predictor
            .iter()
            .fold(F::zero(), |scale, &x| scale.max((x - mean_x).abs()));
        let scale = if scale > F::zero() && scale.is_finite() {
            scale
        } else {
            F::one()
        };

        let (sxx, sxy) = predictor.iter().zip(response.iter()).fold(
            (F::zero(), F::zero()),
            |(sxx, sxy), (&x, &y)| {
                let dx = (x - mean_x) / scale;
                (sxx + dx * dx, sxy + dx * (y - mean_y))
            },
        );

        // a constant predictor may leave a tiny non-zero sum after centering
        let first = predictor.get(0)?;
        let constant = predictor.iter().all(|&x| x == first);
        let degenerate = if self.fit_intercept() {
            constant
        } else {
            constant && first == F::zero()
        };
        let spread = sxx / F::cast(n_samples);
        if degenerate || spread <= self.variance_threshold() / (scale * scale) {
            log::warn!(
                "refusing to fit a degenerate predictor with spread {}",
                spread * scale * scale
            );
            return Err(LinearError::DegenerateInput);
        }

        let slope = sxy / sxx / scale;
        let intercept = mean_y - slope * mean_x;

        log::trace!("fitted intercept {} and slope {}", intercept, slope);

        Ok(FittedLinearRegression {
            intercept,
            slope,
            n_samples,
        })
    }
}

/// View the fitted coefficients and make predictions with a fitted line
impl<F: Float> FittedLinearRegression<F> {
    /// Get the fitted intercept, 0. if no intercept was fitted
    pub fn intercept(&self) -> F {
        self.intercept
    }

    /// Get the fitted slope
    pub fn slope(&self) -> F {
        self.slope
    }

    /// Number of samples the line was fitted on
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Coefficient of determination of the predictions for `predictor` against `response`
    pub fn score(&self, predictor: &NumericArray<F>, response: &NumericArray<F>) -> Result<F> {
        let prediction = self.predict(predictor);
        Ok(prediction.r2(response)?)
    }
}

impl<F: Float> Predict<F, F> for FittedLinearRegression<F> {
    /// Evaluate the fitted line at `x`
    fn predict(&self, x: F) -> F {
        self.intercept + self.slope * x
    }
}

impl<'a, F: Float> Predict<&'a NumericArray<F>, NumericArray<F>> for FittedLinearRegression<F> {
    /// Evaluate the fitted line at every sample of `x`
    fn predict(&self, x: &'a NumericArray<F>) -> NumericArray<F> {
        x.iter().map(|&x| self.predict(x)).collect()
    }
}
