use super::prelude::TAU;

/// Constant-power pan law. `pan` runs 0 (left) to 1 (right).
///
/// Returns `(left, right)` with `left = -cos(theta)`, `right = sin(theta)` and
/// `theta = TAU * pan / 4`, so `left^2 + right^2 == 1` across the whole range.
/// The left gain is phase inverted; only its magnitude matters for loudness.
#[inline]
pub fn pan(pan: f32) -> (f32, f32) {
    let (sin, cos) = (TAU * pan * 0.25).sin_cos();
    (-cos, sin)
}
