// Prelude module for target-dependent helpers

// PI constants
pub use core::f32::consts::{PI, TAU};

use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Generator for noise that doesn't need to be reproducible.
#[cfg(not(target_arch = "wasm32"))]
pub fn entropy_rng() -> SmallRng {
    SmallRng::from_os_rng()
}

#[cfg(target_arch = "wasm32")]
pub fn entropy_rng() -> SmallRng {
    SmallRng::seed_from_u64(fastrand::u64(..))
}
