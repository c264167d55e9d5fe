use super::{Matrix3, Vector3};
use crate::error::{MathError, Result};

/// A unit quaternion, used as a rotation.
///
/// The scalar part is `w`, the vector part `(x, y, z)`. The unit-norm
/// invariant holds by convention and is not re-enforced after arithmetic;
/// [`inverse`](UnitQuaternion::inverse) divides by the measured norm rather
/// than assuming it is exactly 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitQuaternion {
    w: f32,
    x: f32,
    y: f32,
    z: f32,
}

impl UnitQuaternion {
    /// The identity rotation.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Creates a quaternion from its scalar part `w` and vector part
    /// `(x, y, z)`.
    #[must_use]
    pub fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// Creates the rotation by `angle` radians around `axis`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ZeroVector`] if `axis` has zero length.
    pub fn from_axis_angle(angle: f32, axis: &Vector3) -> Result<Self> {
        let a = axis
            .try_normalize(f32::EPSILON)
            .ok_or(MathError::ZeroVector)?;
        let half = angle / 2.0;
        let sin_half = half.sin();
        Ok(Self::new(
            half.cos(),
            a.x * sin_half,
            a.y * sin_half,
            a.z * sin_half,
        ))
    }

    /// Computes the dot product between this and the other quaternion.
    #[must_use]
    pub fn dot(&self, q: &Self) -> f32 {
        self.w * q.w + self.x * q.x + self.y * q.y + self.z * q.z
    }

    /// Computes the Hamilton product `self · q`.
    ///
    /// The product is non-commutative; `a.hamilton(&b)` applies `b` first
    /// when quaternions act on vectors from the left.
    #[must_use]
    pub fn hamilton(&self, q: &Self) -> Self {
        Self::new(
            self.w * q.w - self.x * q.x - self.y * q.y - self.z * q.z,
            self.w * q.x + self.x * q.w + self.y * q.z - self.z * q.y,
            self.w * q.y - self.x * q.z + self.y * q.w + self.z * q.x,
            self.w * q.z + self.x * q.y - self.y * q.x + self.z * q.w,
        )
    }

    /// Returns the componentwise sum of this and `q`.
    #[must_use]
    pub fn add(&self, q: &Self) -> Self {
        Self::new(self.w + q.w, self.x + q.x, self.y + q.y, self.z + q.z)
    }

    /// Returns this quaternion scaled by `s`.
    #[must_use]
    pub fn scale(&self, s: f32) -> Self {
        Self::new(self.w * s, self.x * s, self.y * s, self.z * s)
    }

    /// Computes the norm; for a well-formed unit quaternion this is ≈ 1.
    #[must_use]
    pub fn norm(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Returns the conjugate.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Returns the inverse rotation.
    ///
    /// Computed as the conjugate divided by the measured norm, so a slight
    /// drift away from unit length is compensated instead of amplified.
    #[must_use]
    pub fn inverse(&self) -> Self {
        self.conjugate().scale(1.0 / self.norm())
    }

    /// Rotates the vector `p` by this quaternion.
    ///
    /// Computes `q · (0, p) · q*` and extracts the vector part.
    #[must_use]
    pub fn rotate(&self, p: &Vector3) -> Vector3 {
        let pure = Self::new(0.0, p.x, p.y, p.z);
        let q = self.hamilton(&pure.hamilton(&self.conjugate()));
        Vector3::new(q.x, q.y, q.z)
    }

    /// Converts this unit quaternion to a 3x3 rotation matrix.
    #[must_use]
    pub fn to_rotation_matrix(&self) -> Matrix3 {
        let Self { w, x, y, z } = *self;
        Matrix3::new(
            2.0 * (w * w + x * x) - 1.0,
            2.0 * (x * y - w * z),
            2.0 * (x * z + w * y),
            2.0 * (x * y + w * z),
            2.0 * (w * w + y * y) - 1.0,
            2.0 * (y * z - w * x),
            2.0 * (x * z - w * y),
            2.0 * (y * z + w * x),
            2.0 * (w * w + z * z) - 1.0,
        )
    }

    /// Returns a SLERP interpolation object between the rotations `p` and `q`.
    #[must_use]
    pub fn slerp(p: Self, q: Self) -> Slerp {
        Slerp::new(p, q)
    }
}

impl Default for UnitQuaternion {
    fn default() -> Self {
        Self::identity()
    }
}

/// A spherical linear interpolation between two rotations.
///
/// The arc angle `theta` and `sin(theta)` are computed once at construction.
/// Known edge case: as `theta → 0` (nearly identical rotations) the division
/// by `sin(theta)` is numerically unstable and eventually produces NaN;
/// callers interpolating between near-identical rotations should shortcut to
/// either endpoint themselves.
#[derive(Debug, Clone, Copy)]
pub struct Slerp {
    p: UnitQuaternion,
    q: UnitQuaternion,
    theta: f32,
    sin_theta: f32,
}

impl Slerp {
    /// Creates the interpolation between `p` (at `t = 0`) and `q` (at `t = 1`).
    #[must_use]
    pub fn new(p: UnitQuaternion, q: UnitQuaternion) -> Self {
        let cos_theta = p.dot(&q);
        Self {
            p,
            q,
            theta: cos_theta.acos(),
            sin_theta: (1.0 - cos_theta * cos_theta).sqrt(),
        }
    }

    /// Evaluates the interpolation at parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn interpolate(&self, t: f32) -> UnitQuaternion {
        self.p
            .scale(((1.0 - t) * self.theta).sin())
            .add(&self.q.scale((t * self.theta).sin()))
            .scale(1.0 / self.sin_theta)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    fn assert_quat_eq(a: &UnitQuaternion, b: &UnitQuaternion) {
        assert!(
            (a.w - b.w).abs() < 1e-5
                && (a.x - b.x).abs() < 1e-5
                && (a.y - b.y).abs() < 1e-5
                && (a.z - b.z).abs() < 1e-5,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn identity_rotates_nothing() {
        let p = Vector3::new(1.0, 2.0, 3.0);
        assert!((UnitQuaternion::identity().rotate(&p) - p).norm() < 1e-5);
    }

    #[test]
    fn quarter_turn_about_z() {
        let q = UnitQuaternion::from_axis_angle(PI / 2.0, &Vector3::z()).unwrap();
        let rotated = q.rotate(&Vector3::new(1.0, 0.0, 0.0));
        assert!((rotated - Vector3::new(0.0, 1.0, 0.0)).norm() < 1e-5, "{rotated}");
    }

    #[test]
    fn from_axis_angle_normalizes_axis() {
        let q1 = UnitQuaternion::from_axis_angle(0.8, &Vector3::new(0.0, 0.0, 5.0)).unwrap();
        let q2 = UnitQuaternion::from_axis_angle(0.8, &Vector3::z()).unwrap();
        assert_quat_eq(&q1, &q2);
    }

    #[test]
    fn from_axis_angle_rejects_zero_axis() {
        assert!(UnitQuaternion::from_axis_angle(1.0, &Vector3::zeros()).is_err());
    }

    #[test]
    fn hamilton_is_not_commutative() {
        let a = UnitQuaternion::from_axis_angle(0.5, &Vector3::x()).unwrap();
        let b = UnitQuaternion::from_axis_angle(0.5, &Vector3::y()).unwrap();
        let ab = a.hamilton(&b);
        let ba = b.hamilton(&a);
        assert!((ab.dot(&ab) - 1.0).abs() < 1e-5);
        assert!((ab.x - ba.x).abs() > 1e-3 || (ab.y - ba.y).abs() > 1e-3);
    }

    #[test]
    fn composition_matches_sequential_rotation() {
        let a = UnitQuaternion::from_axis_angle(0.7, &Vector3::x()).unwrap();
        let b = UnitQuaternion::from_axis_angle(-0.3, &Vector3::z()).unwrap();
        let p = Vector3::new(0.2, -1.0, 0.5);
        let via_product = a.hamilton(&b).rotate(&p);
        let sequential = a.rotate(&b.rotate(&p));
        assert!((via_product - sequential).norm() < 1e-5);
    }

    #[test]
    fn inverse_undoes_rotation() {
        let q = UnitQuaternion::from_axis_angle(1.2, &Vector3::new(1.0, 2.0, -1.0)).unwrap();
        let p = Vector3::new(0.3, 0.4, 0.5);
        let back = q.inverse().rotate(&q.rotate(&p));
        assert!((back - p).norm() < 1e-5);
    }

    #[test]
    fn inverse_compensates_for_drifted_norm() {
        let q = UnitQuaternion::new(2.0, 0.0, 0.0, 0.0); // norm 2, not unit
        let inv = q.inverse();
        assert!((inv.norm() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn rotation_matrix_agrees_with_rotate() {
        let q = UnitQuaternion::from_axis_angle(0.9, &Vector3::new(1.0, -1.0, 2.0)).unwrap();
        let p = Vector3::new(1.5, -0.5, 2.0);
        assert!((q.to_rotation_matrix() * p - q.rotate(&p)).norm() < 1e-4);
    }

    // ── slerp ──

    #[test]
    fn slerp_recovers_endpoints() {
        let p = UnitQuaternion::from_axis_angle(0.2, &Vector3::x()).unwrap();
        let q = UnitQuaternion::from_axis_angle(1.5, &Vector3::y()).unwrap();
        let slerp = UnitQuaternion::slerp(p, q);
        assert_quat_eq(&slerp.interpolate(0.0), &p);
        assert_quat_eq(&slerp.interpolate(1.0), &q);
    }

    #[test]
    fn slerp_halfway_is_half_angle() {
        let p = UnitQuaternion::identity();
        let q = UnitQuaternion::from_axis_angle(PI / 2.0, &Vector3::z()).unwrap();
        let half = Slerp::new(p, q).interpolate(0.5);
        let expected = UnitQuaternion::from_axis_angle(PI / 4.0, &Vector3::z()).unwrap();
        assert_quat_eq(&half, &expected);
    }

    #[test]
    fn slerp_stays_unit_length() {
        let p = UnitQuaternion::from_axis_angle(0.3, &Vector3::x()).unwrap();
        let q = UnitQuaternion::from_axis_angle(2.0, &Vector3::new(0.0, 1.0, 1.0)).unwrap();
        let slerp = Slerp::new(p, q);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((slerp.interpolate(t).norm() - 1.0).abs() < 1e-4, "t = {t}");
        }
    }
}
