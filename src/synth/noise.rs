use super::prelude::entropy_rng;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Uniform white noise on [-1, 1].
#[derive(Clone, Debug)]
pub struct NoiseSource {
    rng: SmallRng,
}

impl NoiseSource {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self { rng: entropy_rng() }
    }

    #[inline]
    pub fn next(&mut self) -> f32 {
        self.rng.random_range(-1.0..=1.0)
    }
}

impl Default for NoiseSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}
