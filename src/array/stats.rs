//! Summary statistics of a numeric array
//!
//! Every statistic needs at least one sample, variance and standard deviation need more than
//! `ddof` of them.
use super::NumericArray;
use crate::error::{Error, Result};
use crate::Float;

impl<F: Float> NumericArray<F> {
    pub fn min(&self) -> Result<F> {
        self.data
            .iter()
            .copied()
            .reduce(F::min)
            .ok_or(Error::NotEnoughSamples)
    }

    pub fn max(&self) -> Result<F> {
        self.data
            .iter()
            .copied()
            .reduce(F::max)
            .ok_or(Error::NotEnoughSamples)
    }

    /// Every index holding the smallest sample, in ascending order
    pub fn min_positions(&self) -> Result<Vec<usize>> {
        let min = self.min()?;
        Ok(self.positions_of(min))
    }

    /// Every index holding the largest sample, in ascending order
    pub fn max_positions(&self) -> Result<Vec<usize>> {
        let max = self.max()?;
        Ok(self.positions_of(max))
    }

    fn positions_of(&self, target: F) -> Vec<usize> {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, x)| **x == target)
            .map(|(i, _)| i)
            .collect()
    }

    /// Spread between the largest and smallest sample
    pub fn range(&self) -> Result<F> {
        Ok(self.max()? - self.min()?)
    }

    pub fn mean(&self) -> Result<F> {
        self.data.mean().ok_or(Error::NotEnoughSamples)
    }

    /// Sum of squared deviations from the mean, divided by `len - ddof`
    ///
    /// `ddof = 0` gives the population variance, `ddof = 1` the unbiased sample variance.
    pub fn variance(&self, ddof: usize) -> Result<F> {
        if self.len() <= ddof {
            return Err(Error::NotEnoughSamples);
        }

        let mean = self.mean()?;
        let sum_sq = self.data.iter().map(|&x| (x - mean) * (x - mean)).sum::<F>();

        Ok(sum_sq / F::cast(self.len() - ddof))
    }

    pub fn std_dev(&self, ddof: usize) -> Result<F> {
        self.variance(ddof).map(|var| var.sqrt())
    }
}
