//! Host-facing handles for `teracada`
//!
//! A scripting host talks to the numeric core only through the two handles of this crate. They
//! accept dynamically typed [`Value`]s, keep every host concern out of `teracada` and
//! `teracada-linear`, and surface failures as [`HostError`]s whose [`HostErrorKind`] names the
//! exception the host should raise.
//!
//! ```rust
//! use teracada::Value;
//! use teracada_host::{ArrayHandle, LinearRegressionHandle};
//!
//! let x = ArrayHandle::new(&[5, 15, 25, 35, 45, 55].map(Value::Int))?;
//! let y = ArrayHandle::new(&[5, 20, 14, 32, 22, 38].map(Value::Int))?;
//! assert_eq!(x.repr(), "[5, 15, 25, 35, 45, 55]");
//!
//! let mut model = LinearRegressionHandle::new();
//! model.fit(&x, &y)?;
//! assert!((model.slope()? - 0.54).abs() < 1e-9);
//! # Ok::<(), teracada_host::HostError>(())
//! ```
use teracada::{NumericArray, Value};
use teracada_linear::RegressionModel;

mod error;

pub use error::{Cause, HostError, HostErrorKind, Result};

/// An opaque, immutable array owned by the host
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayHandle {
    array: NumericArray<f64>,
}

impl ArrayHandle {
    /// Build an array from host values, failing with a `TypeError` on any non-numeric value
    pub fn new(values: &[Value]) -> Result<Self> {
        let array = NumericArray::try_from_values(values)?;
        log::trace!("created array of {} elements", array.len());

        Ok(ArrayHandle { array })
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Element at a host position, negative positions count from the back
    pub fn get(&self, position: isize) -> Result<f64> {
        Ok(self.array.get_signed(position)?)
    }

    /// Host display form `[v1, v2, ..., vn]`
    pub fn repr(&self) -> String {
        self.array.to_string()
    }

    pub fn array(&self) -> &NumericArray<f64> {
        &self.array
    }
}

impl From<NumericArray<f64>> for ArrayHandle {
    fn from(array: NumericArray<f64>) -> Self {
        ArrayHandle { array }
    }
}

/// A least squares model owned by the host
///
/// The arrays are passed to every [`fit`](Self::fit) call, the handle does not keep them.
#[derive(Clone, Debug, Default)]
pub struct LinearRegressionHandle {
    model: RegressionModel<f64>,
}

impl LinearRegressionHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fit(&mut self, predictor: &ArrayHandle, response: &ArrayHandle) -> Result<()> {
        Ok(self.model.fit(&predictor.array, &response.array)?)
    }

    /// Evaluate the fitted line at a host number
    pub fn predict(&self, x: &Value) -> Result<f64> {
        let x = x.to_float().ok_or_else(|| {
            HostError::new(
                Cause::TypeMismatch,
                format!("expected a numeric value, found {}", x.type_name()),
            )
        })?;

        Ok(self.model.predict(x)?)
    }

    pub fn intercept(&self) -> Result<f64> {
        Ok(self.model.intercept()?)
    }

    pub fn slope(&self) -> Result<f64> {
        Ok(self.model.slope()?)
    }

    pub fn is_fitted(&self) -> bool {
        self.model.is_fitted()
    }

    /// Host display form of the model
    pub fn repr(&self) -> String {
        match self.model.fitted() {
            Some(fitted) => format!(
                "LinearRegression(intercept={}, slope={})",
                fitted.intercept(),
                fitted.slope()
            ),
            None => "LinearRegression(unfitted)".to_string(),
        }
    }
}
