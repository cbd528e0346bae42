//! Common metrics for regression
//!
//! This module implements common comparison metrices for continuous variables.

use crate::error::{Error, Result};
use crate::{Float, NumericArray};

/// Regression metrices trait
///
/// `self` holds the predictions, `compare_to` the ground truth. Both need the same, non-zero
/// length.
pub trait Regression<F: Float> {
    /// Maximal error between two continuous variables
    fn max_error(&self, compare_to: &NumericArray<F>) -> Result<F>;
    /// Mean error between two continuous variables
    fn mean_absolute_error(&self, compare_to: &NumericArray<F>) -> Result<F>;
    /// Mean squared error between two continuous variables
    fn mean_squared_error(&self, compare_to: &NumericArray<F>) -> Result<F>;
    /// R squared coefficient, is the proportion of the variance in the dependent variable that is
    /// predictable from the independent variable.
    ///
    /// To evaluate the accuracy of a prediction, use
    /// ```ignore
    /// prediction.r2(&ground_truth)
    /// ```
    fn r2(&self, compare_to: &NumericArray<F>) -> Result<F>;
}

impl<F: Float> NumericArray<F> {
    fn residuals<'a>(
        &'a self,
        compare_to: &'a NumericArray<F>,
    ) -> Result<impl Iterator<Item = F> + 'a> {
        if self.len() != compare_to.len() {
            return Err(Error::MismatchedShapes(self.len(), compare_to.len()));
        }
        if self.is_empty() {
            return Err(Error::NotEnoughSamples);
        }

        Ok(self.iter().zip(compare_to.iter()).map(|(&a, &b)| a - b))
    }
}

impl<F: Float> Regression<F> for NumericArray<F> {
    fn max_error(&self, compare_to: &NumericArray<F>) -> Result<F> {
        Ok(self
            .residuals(compare_to)?
            .map(|x| x.abs())
            .fold(F::neg_infinity(), F::max))
    }

    fn mean_absolute_error(&self, compare_to: &NumericArray<F>) -> Result<F> {
        let sum = self.residuals(compare_to)?.map(|x| x.abs()).sum::<F>();

        Ok(sum / F::cast(self.len()))
    }

    fn mean_squared_error(&self, compare_to: &NumericArray<F>) -> Result<F> {
        let sum = self.residuals(compare_to)?.map(|x| x * x).sum::<F>();

        Ok(sum / F::cast(self.len()))
    }

    // r2 = 1 - sum((pred_i - y_i)^2)/sum((mean_y - y_i)^2)
    // the mean is taken over `compare_to`, the ground truth
    fn r2(&self, compare_to: &NumericArray<F>) -> Result<F> {
        let ss_res = self.residuals(compare_to)?.map(|x| x * x).sum::<F>();

        let mean = compare_to.mean()?;
        let ss_tot = compare_to
            .iter()
            .map(|&y| (y - mean) * (y - mean))
            .sum::<F>();

        Ok(F::one() - ss_res / (ss_tot + F::cast(1e-10)))
    }
}
