//! A regression model which remembers its last successful fit
//!
//! [`RegressionModel`] starts out unfitted. Every successful call to [`fit`](RegressionModel::fit)
//! replaces the coefficients, a failed call leaves the previous ones in place. Coefficients and
//! predictions are only available once a fit succeeded, before that they return
//! [`LinearError::NotFitted`].
use teracada::traits::{Fit, Predict};
use teracada::{Float, NumericArray, ParamGuard};

use crate::error::{LinearError, Result};
use crate::hyperparams::{LinearRegression, LinearRegressionValidParams};
use crate::ols::FittedLinearRegression;

#[derive(Clone, Debug, PartialEq)]
pub struct RegressionModel<F = f64> {
    params: LinearRegressionValidParams<F>,
    fitted: Option<FittedLinearRegression<F>>,
}

impl<F: Float> Default for RegressionModel<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> RegressionModel<F> {
    /// Create an unfitted model with default hyper-parameters
    pub fn new() -> Self {
        RegressionModel {
            params: LinearRegressionValidParams::default(),
            fitted: None,
        }
    }

    /// Create an unfitted model after checking the given hyper-parameters
    ///
    /// ```rust
    /// use teracada_linear::{LinearError, LinearRegression, RegressionModel};
    ///
    /// let model = RegressionModel::<f64>::with_params(LinearRegression::new().with_intercept(false))?;
    /// assert!(!model.is_fitted());
    ///
    /// let invalid = RegressionModel::with_params(LinearRegression::new().variance_threshold(-1.0));
    /// assert!(matches!(invalid, Err(LinearError::InvalidVarianceThreshold(_))));
    /// # Ok::<(), LinearError>(())
    /// ```
    pub fn with_params(params: LinearRegression<F>) -> Result<Self> {
        Ok(RegressionModel {
            params: params.check()?,
            fitted: None,
        })
    }

    pub fn params(&self) -> &LinearRegressionValidParams<F> {
        &self.params
    }

    /// Fit the model to `predictor` and `response`, overwriting any previous fit
    ///
    /// On error the model keeps the state it had before the call.
    pub fn fit(&mut self, predictor: &NumericArray<F>, response: &NumericArray<F>) -> Result<()> {
        let fitted = self.params.fit(predictor, response)?;
        if self.fitted.is_some() {
            log::debug!("replacing previous fit");
        }
        self.fitted = Some(fitted);

        Ok(())
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// The current fit, `None` until `fit` succeeded
    pub fn fitted(&self) -> Option<&FittedLinearRegression<F>> {
        self.fitted.as_ref()
    }

    /// Forget the current fit
    pub fn reset(&mut self) {
        self.fitted = None;
    }

    fn try_fitted(&self) -> Result<&FittedLinearRegression<F>> {
        self.fitted.as_ref().ok_or(LinearError::NotFitted)
    }

    pub fn intercept(&self) -> Result<F> {
        self.try_fitted().map(FittedLinearRegression::intercept)
    }

    pub fn slope(&self) -> Result<F> {
        self.try_fitted().map(FittedLinearRegression::slope)
    }

    /// Evaluate the fitted line at `x`
    pub fn predict(&self, x: F) -> Result<F> {
        Ok(self.try_fitted()?.predict(x))
    }

    /// Evaluate the fitted line at every sample of `x`
    pub fn predict_array(&self, x: &NumericArray<F>) -> Result<NumericArray<F>> {
        Ok(self.try_fitted()?.predict(x))
    }

    /// Coefficient of determination of the current fit on the given data
    pub fn score(&self, predictor: &NumericArray<F>, response: &NumericArray<F>) -> Result<F> {
        self.try_fitted()?.score(predictor, response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn reference() -> (NumericArray<f64>, NumericArray<f64>) {
        (
            NumericArray::from_vec(vec![5., 15., 25., 35., 45., 55.]),
            NumericArray::from_vec(vec![5., 20., 14., 32., 22., 38.]),
        )
    }

    #[test]
    fn unfitted_model_refuses_queries() {
        let model = RegressionModel::<f64>::new();

        assert!(!model.is_fitted());
        assert!(model.fitted().is_none());
        assert_eq!(model.intercept(), Err(LinearError::NotFitted));
        assert_eq!(model.slope(), Err(LinearError::NotFitted));
        assert_eq!(model.predict(1.), Err(LinearError::NotFitted));
        assert_eq!(
            model.predict_array(&NumericArray::from_vec(vec![1.])),
            Err(LinearError::NotFitted)
        );
    }

    #[test]
    fn fit_then_predict() {
        let (x, y) = reference();
        let mut model = RegressionModel::new();
        model.fit(&x, &y).unwrap();

        assert!(model.is_fitted());
        assert_abs_diff_eq!(model.intercept().unwrap(), 5.633333333333333, epsilon = 1e-9);
        assert_abs_diff_eq!(model.slope().unwrap(), 0.54, epsilon = 1e-9);

        let expected = model.intercept().unwrap() + model.slope().unwrap() * 60.;
        assert_abs_diff_eq!(model.predict(60.).unwrap(), expected, epsilon = 1e-12);

        let predictions = model.predict_array(&x).unwrap();
        assert_eq!(predictions.len(), x.len());
        assert_abs_diff_eq!(predictions.get(0).unwrap(), 5.633333333333333 + 2.7, epsilon = 1e-9);
    }

    #[test]
    fn failed_fit_keeps_previous_coefficients() {
        let (x, y) = reference();
        let mut model = RegressionModel::new();
        model.fit(&x, &y).unwrap();
        let before = model.clone();

        let short = NumericArray::from_vec(vec![5., 20., 14., 32., 22.]);
        assert_eq!(
            model.fit(&x, &short),
            Err(LinearError::LengthMismatch {
                predictor: 6,
                response: 5
            })
        );
        assert_eq!(model, before);

        let constant = NumericArray::from_vec(vec![3., 3., 3.]);
        let three = NumericArray::from_vec(vec![1., 2., 3.]);
        assert_eq!(model.fit(&constant, &three), Err(LinearError::DegenerateInput));
        assert_eq!(model, before);
    }

    #[test]
    fn failed_first_fit_stays_unfitted() {
        let mut model = RegressionModel::new();
        let one = NumericArray::from_vec(vec![1.]);

        assert_eq!(model.fit(&one, &one), Err(LinearError::InsufficientSamples(1)));
        assert!(!model.is_fitted());
    }

    #[test]
    fn refit_overwrites_and_is_idempotent() {
        let (x, y) = reference();
        let mut model = RegressionModel::new();

        model.fit(&x, &y).unwrap();
        let first = model.fitted().cloned();
        model.fit(&x, &y).unwrap();
        assert_eq!(model.fitted().cloned(), first);

        let x2 = NumericArray::from_vec(vec![0., 1.]);
        let y2 = NumericArray::from_vec(vec![1., 3.]);
        model.fit(&x2, &y2).unwrap();
        assert_abs_diff_eq!(model.slope().unwrap(), 2., epsilon = 1e-12);
        assert_abs_diff_eq!(model.intercept().unwrap(), 1., epsilon = 1e-12);
    }

    #[test]
    fn reset_returns_to_unfitted() {
        let (x, y) = reference();
        let mut model = RegressionModel::new();
        model.fit(&x, &y).unwrap();
        model.reset();

        assert_eq!(model.predict(0.), Err(LinearError::NotFitted));
    }

    #[test]
    fn custom_params_are_used() {
        let mut model =
            RegressionModel::with_params(LinearRegression::new().with_intercept(false)).unwrap();
        let x = NumericArray::from_vec(vec![1., 2., 3.]);
        let y = NumericArray::from_vec(vec![3., 5., 7.]);
        model.fit(&x, &y).unwrap();

        assert!(!model.params().fit_intercept());
        assert_eq!(model.intercept(), Ok(0.));
        // slope 17/7 leaves residuals 4/7, 1/7 and -2/7
        assert_abs_diff_eq!(model.score(&x, &y).unwrap(), 53. / 56., epsilon = 1e-9);
    }
}
