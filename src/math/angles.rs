use std::f32::consts::PI;

use rand::Rng;

use super::scalar::modulo;
use super::{Vector2, Vector3, TOLERANCE, TWO_PI};
use crate::error::{MathError, Result};
use crate::math::random::random_bounded;

/// Converts an angle in degrees to radians.
#[must_use]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

/// Converts an angle in radians to degrees.
#[must_use]
pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * 180.0 / PI
}

/// Returns the `angle` normalized to the range `[0, 2π)`.
#[must_use]
pub fn normalize_angle(angle: f32) -> f32 {
    modulo(angle, TWO_PI)
}

/// Returns the `angle` normalized to the range `[-π, π)`.
#[must_use]
pub fn normalize_half_angle(angle: f32) -> f32 {
    let angle = normalize_angle(angle);
    if angle >= PI {
        angle - TWO_PI
    } else {
        angle
    }
}

/// Computes the angle from `u` to `v`, normalized to `[0, 2π)`.
///
/// # Errors
///
/// Returns [`MathError::NotNormalized`] unless both inputs are unit length.
pub fn angle_between_2d(u: &Vector2, v: &Vector2) -> Result<f32> {
    for vec in [u, v] {
        let length = vec.norm();
        if (length - 1.0).abs() >= TOLERANCE {
            return Err(MathError::NotNormalized { length }.into());
        }
    }

    let a = u.y.atan2(u.x);
    let b = v.y.atan2(v.x);
    Ok(normalize_angle(b - a))
}

/// Computes the signed angle from `u` to `v` in the plane with normal `up`.
///
/// Inputs are normalized internally. The sign is resolved by checking
/// whether `v` lies on the `cross(up, u)` side of `u`; near-(anti)parallel
/// inputs short-circuit to `0` and `π` so floating-point overshoot never
/// leaves the `acos` domain.
///
/// # Errors
///
/// Returns [`MathError::ZeroVector`] if `u` or `v` has zero length.
pub fn angle_between_3d(u: &Vector3, v: &Vector3, up: &Vector3) -> Result<f32> {
    let u = u
        .try_normalize(TOLERANCE)
        .ok_or(MathError::ZeroVector)?;
    let v = v
        .try_normalize(TOLERANCE)
        .ok_or(MathError::ZeroVector)?;

    let dot = u.dot(&v);
    if (dot - 1.0).abs() < TOLERANCE {
        return Ok(0.0);
    } else if (dot + 1.0).abs() < TOLERANCE {
        return Ok(PI);
    }

    let mut angle = dot.acos();
    let base_dir = up.cross(&u);
    if base_dir.dot(&v) < 0.0 {
        angle = -angle;
    }
    Ok(angle)
}

/// Returns a random angle in the range `[0, 2π)`.
///
/// # Errors
///
/// Infallible in practice; shares the signature of
/// [`random_bounded`](crate::math::random::random_bounded).
pub fn random_angle(rng: &mut impl Rng) -> Result<f32> {
    random_bounded(TWO_PI, rng)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GeokernError;
    use crate::math::random::SeededRandom;
    use crate::math::vectors::from_polar;

    // ── normalize_angle ──

    #[test]
    fn normalize_angle_is_periodic() {
        for k in -3..=3 {
            let angle = 1.25;
            let shifted = angle + TWO_PI * k as f32;
            assert!(
                (normalize_angle(shifted) - angle).abs() < 1e-4,
                "k = {k}"
            );
        }
    }

    #[test]
    fn normalize_angle_range() {
        for i in -100..100 {
            let a = normalize_angle(i as f32 * 0.37);
            assert!((0.0..TWO_PI).contains(&a), "a = {a}");
        }
    }

    #[test]
    fn normalize_half_angle_range() {
        for i in -100..100 {
            let a = normalize_half_angle(i as f32 * 0.37);
            assert!((-PI..PI).contains(&a), "a = {a}");
        }
        assert!((normalize_half_angle(PI) + PI).abs() < 1e-4);
        assert!((normalize_half_angle(-0.5) + 0.5).abs() < 1e-4);
    }

    // ── angle_between_2d ──

    #[test]
    fn angle_between_2d_same_vector_is_zero() {
        for i in 0..8 {
            let u = from_polar(1.0, i as f32 * 0.7);
            assert!(angle_between_2d(&u, &u).unwrap().abs() < 1e-4);
        }
    }

    #[test]
    fn angle_between_2d_opposite_vector_is_pi() {
        for i in 0..8 {
            let u = from_polar(1.0, i as f32 * 0.7);
            let angle = angle_between_2d(&u, &(-u)).unwrap();
            assert!((angle - PI).abs() < 1e-4, "angle = {angle}");
        }
    }

    #[test]
    fn angle_between_2d_quarter_turn() {
        let u = Vector2::new(1.0, 0.0);
        let v = Vector2::new(0.0, 1.0);
        assert!((angle_between_2d(&u, &v).unwrap() - PI / 2.0).abs() < 1e-4);
    }

    #[test]
    fn angle_between_2d_rejects_non_unit_input() {
        let u = Vector2::new(2.0, 0.0);
        let v = Vector2::new(0.0, 1.0);
        assert!(matches!(
            angle_between_2d(&u, &v),
            Err(GeokernError::Math(MathError::NotNormalized { .. }))
        ));
    }

    // ── angle_between_3d ──

    #[test]
    fn angle_between_3d_normalizes_inputs() {
        let u = Vector3::new(3.0, 0.0, 0.0);
        let v = Vector3::new(0.0, 5.0, 0.0);
        let up = Vector3::new(0.0, 0.0, 1.0);
        assert!((angle_between_3d(&u, &v, &up).unwrap() - PI / 2.0).abs() < 1e-4);
    }

    #[test]
    fn angle_between_3d_sign_follows_up_normal() {
        let u = Vector3::new(1.0, 0.0, 0.0);
        let v = Vector3::new(0.0, 1.0, 0.0);
        let down = Vector3::new(0.0, 0.0, -1.0);
        assert!((angle_between_3d(&u, &v, &down).unwrap() + PI / 2.0).abs() < 1e-4);
    }

    #[test]
    fn angle_between_3d_parallel_and_antiparallel() {
        let u = Vector3::new(0.4, -0.2, 0.7);
        let up = Vector3::new(0.0, 1.0, 0.0);
        assert!(angle_between_3d(&u, &u, &up).unwrap().abs() < 1e-4);
        let angle = angle_between_3d(&u, &(-u), &up).unwrap();
        assert!((angle - PI).abs() < 1e-4, "angle = {angle}");
    }

    #[test]
    fn angle_between_3d_rejects_zero_vector() {
        let zero = Vector3::zeros();
        let v = Vector3::new(0.0, 1.0, 0.0);
        assert!(matches!(
            angle_between_3d(&zero, &v, &v),
            Err(GeokernError::Math(MathError::ZeroVector))
        ));
    }

    #[test]
    fn random_angle_range() {
        let mut rng = SeededRandom::new(3);
        for _ in 0..1000 {
            let a = random_angle(&mut rng).unwrap();
            assert!((0.0..TWO_PI).contains(&a), "a = {a}");
        }
    }
}
