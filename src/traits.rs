//! Provide traits for different classes of algorithms
//!

use crate::param_guard::ParamGuard;

/// Fittable algorithms
///
/// A fittable algorithm takes records and targets and creates a model which can be used to
/// predict unseen targets. The hyper-parameters of the algorithm are the receiver, the fitted
/// model is returned, so that fitting never alters the configuration.
pub trait Fit<R, T, E: std::error::Error + From<crate::error::Error>> {
    type Object;

    fn fit(&self, records: &R, targets: &T) -> Result<Self::Object, E>;
}

/// Predict with a fitted model
///
/// The prediction consumes the input by value, implementations for references and plain numbers
/// are provided by the models themselves.
pub trait Predict<R, T> {
    fn predict(&self, x: R) -> T;
}

/// Performs checking step and calls `fit` on the checked hyperparameters. If checking failed, the
/// checking error is converted to the original error type of `Fit` and returned.
impl<R, T, E, P: ParamGuard> Fit<R, T, E> for P
where
    P::Checked: Fit<R, T, E>,
    E: std::error::Error + From<crate::error::Error> + From<P::Error>,
{
    type Object = <<P as ParamGuard>::Checked as Fit<R, T, E>>::Object;

    fn fit(&self, records: &R, targets: &T) -> Result<Self::Object, E> {
        let checked = self.check_ref()?;
        checked.fit(records, targets)
    }
}
