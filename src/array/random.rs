use rand::distributions::{Distribution, Uniform};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::NumericArray;
use crate::error::{Error, Result};
use crate::Float;

impl<F: Float> NumericArray<F> {
    /// Draw `len` samples uniformly from `[low, high)`
    ///
    /// Fails with [`Error::Parameters`] if a bound is not finite or `low >= high`.
    pub fn random_uniform<R: Rng + ?Sized>(len: usize, low: F, high: F, rng: &mut R) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() {
            return Err(Error::Parameters(format!(
                "uniform bounds must be finite, got [{}, {})",
                low, high
            )));
        }
        if low >= high {
            return Err(Error::Parameters(format!(
                "lower bound {} must be smaller than upper bound {}",
                low, high
            )));
        }

        let distr = Uniform::new(low, high);
        Ok(distr.sample_iter(rng).take(len).collect())
    }

    /// Same as [`random_uniform`](Self::random_uniform) with a `SmallRng` seeded from `seed`, two
    /// calls with the same arguments produce the same array
    pub fn random_uniform_seeded(len: usize, low: F, high: F, seed: u64) -> Result<Self> {
        let mut rng = SmallRng::seed_from_u64(seed);
        Self::random_uniform(len, low, high, &mut rng)
    }
}
