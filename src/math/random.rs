//! Uniform sampling helpers and a deterministic, non-reseedable RNG.
//!
//! The random source is always passed in by the caller; the kernel holds no
//! hidden process-wide generator state.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::error::{MathError, Result};

/// Returns a value in the range `[0, bound)`,
/// chosen pseudo-randomly from a uniform distribution.
///
/// Floating-point rounding can push the scaled sample onto `bound` itself;
/// in that case the largest representable value below `bound` is returned.
///
/// # Errors
///
/// Returns [`MathError::NonPositiveBound`] if `bound` is not positive.
pub fn random_bounded(bound: f32, rng: &mut impl Rng) -> Result<f32> {
    if bound <= 0.0 {
        return Err(MathError::NonPositiveBound { bound }.into());
    }
    let result = rng.gen::<f32>() * bound;
    if result < bound {
        Ok(result)
    } else {
        Ok(bound.next_down())
    }
}

/// Returns a value in the range `[origin, bound)`,
/// chosen pseudo-randomly from a uniform distribution.
///
/// Floating-point rounding can push the scaled sample onto `bound` itself;
/// in that case the largest representable value below `bound` is returned.
///
/// # Errors
///
/// Returns [`MathError::EmptyRange`] if `origin` is not less than `bound`.
pub fn random_range(origin: f32, bound: f32, rng: &mut impl Rng) -> Result<f32> {
    if origin >= bound {
        return Err(MathError::EmptyRange { origin, bound }.into());
    }
    let result = rng.gen::<f32>() * (bound - origin) + origin;
    if result < bound {
        Ok(result)
    } else {
        Ok(bound.next_down())
    }
}

/// A deterministic random source that can not be re-seeded after creation.
///
/// Two instances created with the same seed produce identical sequences,
/// which makes results reproducible across runs.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Returns a fresh seed, drawn from the thread-local generator.
    #[must_use]
    pub fn new_seed() -> u64 {
        rand::thread_rng().gen()
    }

    /// Creates a new deterministic source from the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// This source may not be re-seeded.
    ///
    /// # Errors
    ///
    /// Always returns [`MathError::AlreadySeeded`]; the method exists to make
    /// the contract explicit rather than leaving re-seeding unrepresentable
    /// and undocumented.
    pub fn reseed(&mut self, _seed: u64) -> Result<()> {
        Err(MathError::AlreadySeeded.into())
    }
}

impl RngCore for SeededRandom {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}
