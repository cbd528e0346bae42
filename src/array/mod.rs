//! Fixed-length numeric arrays
//!
//! A [`NumericArray`] owns a copy of the samples it was built from and never changes afterwards.
//! Element access is bounds-checked and reports [`Error::IndexOutOfRange`] instead of panicking.
use ndarray::{Array1, ArrayView1};
use std::convert::TryFrom;
use std::fmt;
use std::iter::FromIterator;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::{Float, Value};

mod random;
pub mod stats;

/// An immutable, owned, one-dimensional array of floating point samples
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct NumericArray<F> {
    data: Array1<F>,
}

impl<F: Float> NumericArray<F> {
    /// Take ownership of a vector of samples
    pub fn from_vec(values: Vec<F>) -> Self {
        NumericArray {
            data: Array1::from(values),
        }
    }

    /// Copy the samples of a slice into a new array
    pub fn from_slice(values: &[F]) -> Self {
        Self::from_vec(values.to_vec())
    }

    /// Build an array from dynamically typed host values
    ///
    /// Fails with [`Error::TypeMismatch`] at the first value which is not numeric. No array is
    /// produced in that case.
    ///
    /// ```rust
    /// use teracada::{NumericArray, Value};
    ///
    /// let arr = NumericArray::<f64>::try_from_values(&[Value::Int(1), Value::Float(2.5)])?;
    /// assert_eq!(arr.to_string(), "[1, 2.5]");
    ///
    /// let err = NumericArray::<f64>::try_from_values(&[Value::Int(1), Value::from("x")]);
    /// assert!(err.is_err());
    /// # Ok::<(), teracada::Error>(())
    /// ```
    pub fn try_from_values(values: &[Value]) -> Result<Self> {
        let data = values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                value.to_float().ok_or_else(|| {
                    log::warn!("rejecting non-numeric {} at index {}", value.type_name(), index);
                    Error::TypeMismatch {
                        index,
                        found: value.type_name(),
                    }
                })
            })
            .collect::<Result<Vec<F>>>()?;

        Ok(Self::from_vec(data))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return the element at `index`
    ///
    /// Fails with [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<F> {
        self.data
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange {
                index: isize::try_from(index).unwrap_or(isize::MAX),
                len: self.len(),
            })
    }

    /// Return the element at a signed position, negative positions count from the back
    ///
    /// `-1` is the last element and `-len()` the first one.
    pub fn get_signed(&self, position: isize) -> Result<F> {
        let len = self.len();
        let out_of_range = Error::IndexOutOfRange {
            index: position,
            len,
        };

        let index = if position < 0 {
            len.checked_sub(position.unsigned_abs())
                .ok_or(out_of_range.clone())?
        } else {
            position as usize
        };

        self.data.get(index).copied().ok_or(out_of_range)
    }

    pub fn iter(&self) -> impl Iterator<Item = &F> + '_ {
        self.data.iter()
    }

    /// Read-only ndarray view of the samples
    pub fn view(&self) -> ArrayView1<'_, F> {
        self.data.view()
    }

    pub fn as_slice(&self) -> &[F] {
        // owned one-dimensional arrays are always contiguous
        self.data.as_slice().unwrap_or(&[])
    }

    pub fn to_vec(&self) -> Vec<F> {
        self.data.to_vec()
    }
}

impl<F: Float> From<Vec<F>> for NumericArray<F> {
    fn from(values: Vec<F>) -> Self {
        Self::from_vec(values)
    }
}

impl<F: Float> From<&[F]> for NumericArray<F> {
    fn from(values: &[F]) -> Self {
        Self::from_slice(values)
    }
}

impl<F: Float> FromIterator<F> for NumericArray<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<F: Float> fmt::Display for NumericArray<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_and_elements_match_input() {
        let values = vec![5., 15., 25., 35., 45., 55.];
        let arr = NumericArray::from_slice(&values);

        assert_eq!(arr.len(), values.len());
        for (i, v) in values.iter().enumerate() {
            assert_eq!(arr.get(i).unwrap(), *v);
        }
    }

    #[test]
    fn copies_the_input() {
        let mut values = vec![1f64, 2., 3.];
        let arr = NumericArray::from_slice(&values);
        values[0] = 100.;

        assert_eq!(arr.get(0), Ok(1.));
    }

    #[test]
    fn empty_array() {
        let arr = NumericArray::<f64>::from_vec(vec![]);

        assert_eq!(arr.len(), 0);
        assert!(arr.is_empty());
        assert_eq!(arr.to_string(), "[]");
        assert_eq!(
            arr.get(0),
            Err(Error::IndexOutOfRange { index: 0, len: 0 })
        );
        assert!(arr.get_signed(-1).is_err());
    }

    #[test]
    fn out_of_range_access_fails() {
        let arr: NumericArray<f64> = vec![1., 2., 3.].into();

        assert_eq!(
            arr.get(3),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            arr.get(usize::MAX),
            Err(Error::IndexOutOfRange {
                index: isize::MAX,
                len: 3
            })
        );
    }

    #[test]
    fn signed_positions_count_from_the_back() {
        let arr: NumericArray<f64> = vec![1., 2., 3.].into_iter().collect();

        assert_eq!(arr.get_signed(0), Ok(1.));
        assert_eq!(arr.get_signed(-1), Ok(3.));
        assert_eq!(arr.get_signed(-3), Ok(1.));
        assert_eq!(
            arr.get_signed(-4),
            Err(Error::IndexOutOfRange { index: -4, len: 3 })
        );
        assert_eq!(
            arr.get_signed(3),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn displays_bracketed_and_comma_separated() {
        let arr = NumericArray::from_vec(vec![5., 20.5, -14.]);
        assert_eq!(arr.to_string(), "[5, 20.5, -14]");

        let single = NumericArray::from_vec(vec![0.25f32]);
        assert_eq!(format!("{}", single), "[0.25]");
    }

    #[test]
    fn builds_from_host_values() {
        let arr = NumericArray::<f64>::try_from_values(&[
            Value::Int(5),
            Value::Float(20.5),
            Value::Int(-3),
        ])
        .unwrap();

        assert_eq!(arr.to_vec(), vec![5., 20.5, -3.]);
        assert_eq!(arr.as_slice(), &[5., 20.5, -3.]);
    }

    #[test]
    fn non_numeric_host_values_fail() {
        let res = NumericArray::<f64>::try_from_values(&[
            Value::Int(5),
            Value::Float(1.0),
            Value::from("14"),
            Value::Null,
        ]);

        assert_eq!(
            res,
            Err(Error::TypeMismatch {
                index: 2,
                found: "str"
            })
        );

        let res = NumericArray::<f64>::try_from_values(&[Value::Bool(true)]);
        assert_eq!(
            res,
            Err(Error::TypeMismatch {
                index: 0,
                found: "bool"
            })
        );
    }

    #[test]
    fn empty_host_sequence_is_allowed() {
        let arr = NumericArray::<f64>::try_from_values(&[]).unwrap();
        assert!(arr.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_with_serde() {
        let arr = NumericArray::from_vec(vec![1f64, 2.]);
        let json = serde_json::to_string(&arr).unwrap();
        let back: NumericArray<f64> = serde_json::from_str(&json).unwrap();

        assert_eq!(arr, back);
    }
}
