use nalgebra::SVector;

use super::TOLERANCE;

/// Returns true if the two values are numerically equal,
/// that is their absolute difference is less than [`TOLERANCE`](super::TOLERANCE).
#[must_use]
pub fn equals(a: f32, b: f32) -> bool {
    (a - b).abs() < TOLERANCE
}

/// Calculates the mathematical modulo of `a` and `b`.
///
/// In contrast to the `%` operator, which calculates the remainder, the
/// result is non-negative for every `a` when `b` is positive.
#[must_use]
pub fn modulo(a: f32, b: f32) -> f32 {
    a - b * (a / b).floor()
}

/// Calculates the index into a fixed-size circular buffer,
/// wrapping an invalid index at both ends.
///
/// `i` is the possibly invalid index, `n` the size of the buffer.
#[must_use]
pub fn wrap(i: isize, n: usize) -> usize {
    let n = n as isize;
    (((i % n) + n) % n) as usize
}

/// Normalizes `val` from the range `[min, max]` to the range `[0, 1]`.
///
/// Also known as min-max scaling or unity-based normalization.
#[must_use]
pub fn normalize_min_max(val: f32, min: f32, max: f32) -> f32 {
    (val - min) / (max - min)
}

/// Calculates the linear interpolation `(1 - t) * a + t * b`.
///
/// `t` is not clamped; values outside `[0, 1]` extrapolate.
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (1.0 - t) * a + t * b
}

/// Calculates the componentwise linear interpolation between two vectors
/// of any fixed dimension.
///
/// `t` is not clamped; values outside `[0, 1]` extrapolate.
#[must_use]
pub fn lerp_vec<const D: usize>(
    a: &SVector<f32, D>,
    b: &SVector<f32, D>,
    t: f32,
) -> SVector<f32, D> {
    a.zip_map(b, |ai, bi| lerp(ai, bi, t))
}
