//! Construction of homogeneous transformation matrices.
//!
//! All builders are pure functions returning a new matrix. Points are
//! transformed via homogeneous coordinates (`w = 1`); compose transforms by
//! plain matrix multiplication.

use super::quaternion::UnitQuaternion;
use super::{Matrix3, Matrix4, Point2, Point3, Vector2, Vector3};
use crate::error::{MathError, Result};

// 2D homogeneous transformation matrices
// ===========================================================================

/// Creates a 3x3 transformation matrix for 2D, projecting into a new
/// coordinate system spanned by the two basis vectors `e_x` and `e_y`.
#[must_use]
pub fn coordinate_system_2d(e_x: &Vector2, e_y: &Vector2) -> Matrix3 {
    Matrix3::new(
        e_x.x, e_y.x, 0.0, //
        e_x.y, e_y.y, 0.0, //
        0.0, 0.0, 1.0,
    )
}

/// Creates a 3x3 transformation matrix for 2D, projecting into a new
/// coordinate system spanned by `e_x` and `e_y`, offset by `origin`.
#[must_use]
pub fn coordinate_system_2d_at(e_x: &Vector2, e_y: &Vector2, origin: &Vector2) -> Matrix3 {
    translation_2d(origin) * coordinate_system_2d(e_x, e_y)
}

/// Creates a 3x3 transformation matrix for 2D, translating by `v`.
#[must_use]
pub fn translation_2d(v: &Vector2) -> Matrix3 {
    Matrix3::new(
        1.0, 0.0, v.x, //
        0.0, 1.0, v.y, //
        0.0, 0.0, 1.0,
    )
}

/// Creates a 3x3 transformation matrix for 2D, rotating by angle `theta`
/// counter-clockwise around the origin.
#[must_use]
pub fn rotation_2d(theta: f32) -> Matrix3 {
    let (sin, cos) = theta.sin_cos();
    Matrix3::new(
        cos, -sin, 0.0, //
        sin, cos, 0.0, //
        0.0, 0.0, 1.0,
    )
}

/// Creates a 3x3 transformation matrix for 2D, rotating by angle `theta`
/// counter-clockwise around the pivot point `p`.
///
/// Composed as `T(p) · R(theta) · T(-p)`.
#[must_use]
pub fn rotation_2d_about(theta: f32, p: &Point2) -> Matrix3 {
    translation_2d(&p.coords) * rotation_2d(theta) * translation_2d(&-p.coords)
}

/// Applies a 3x3 homogeneous transformation matrix to a 2D point.
#[must_use]
pub fn transform_point_2d(m: &Matrix3, p: &Point2) -> Point2 {
    let u = m * nalgebra::Vector3::new(p.x, p.y, 1.0);
    Point2::new(u.x, u.y)
}

// 3D homogeneous transformation matrices
// ===========================================================================

/// Creates a 4x4 transformation matrix for 3D, projecting into a new
/// coordinate system spanned by the basis vectors `e_x`, `e_y` and `e_z`.
#[must_use]
pub fn coordinate_system_3d(e_x: &Vector3, e_y: &Vector3, e_z: &Vector3) -> Matrix4 {
    Matrix4::new(
        e_x.x, e_y.x, e_z.x, 0.0, //
        e_x.y, e_y.y, e_z.y, 0.0, //
        e_x.z, e_y.z, e_z.z, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Creates a 4x4 transformation matrix for 3D, projecting into a new
/// coordinate system spanned by `e_x`, `e_y` and `e_z`, offset by `origin`.
#[must_use]
pub fn coordinate_system_3d_at(
    e_x: &Vector3,
    e_y: &Vector3,
    e_z: &Vector3,
    origin: &Vector3,
) -> Matrix4 {
    translation_3d(origin) * coordinate_system_3d(e_x, e_y, e_z)
}

/// Creates a 4x4 transformation matrix for 3D, translating by `v`.
#[must_use]
pub fn translation_3d(v: &Vector3) -> Matrix4 {
    Matrix4::new(
        1.0, 0.0, 0.0, v.x, //
        0.0, 1.0, 0.0, v.y, //
        0.0, 0.0, 1.0, v.z, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Creates a 4x4 transformation matrix for 3D, rotating by angle `theta`
/// around the axis `axis` through the origin.
///
/// # Errors
///
/// Returns [`MathError::ZeroVector`] if `axis` has zero length.
pub fn rotation_3d(axis: &Vector3, theta: f32) -> Result<Matrix4> {
    let q = UnitQuaternion::from_axis_angle(theta, axis)?;
    Ok(q.to_rotation_matrix().to_homogeneous())
}

/// Creates a 4x4 transformation matrix for 3D, rotating by angle `theta`
/// around the axis `axis` through the pivot point `p`.
///
/// Composed as `T(p) · R(axis, theta) · T(-p)`.
///
/// # Errors
///
/// Returns [`MathError::ZeroVector`] if `axis` has zero length.
pub fn rotation_3d_about(axis: &Vector3, theta: f32, p: &Point3) -> Result<Matrix4> {
    Ok(translation_3d(&p.coords) * rotation_3d(axis, theta)? * translation_3d(&-p.coords))
}

/// Creates a 4x4 transformation matrix for 3D, scaling along each axis by
/// the individual components of `s`.
#[must_use]
pub fn scaling_3d(s: &Vector3) -> Matrix4 {
    Matrix4::new(
        s.x, 0.0, 0.0, 0.0, //
        0.0, s.y, 0.0, 0.0, //
        0.0, 0.0, s.z, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Applies a 4x4 homogeneous transformation matrix to a 3D point.
#[must_use]
pub fn transform_point_3d(m: &Matrix4, p: &Point3) -> Point3 {
    let u = m * nalgebra::Vector4::new(p.x, p.y, p.z, 1.0);
    Point3::new(u.x, u.y, u.z)
}

// miscellaneous
// ===========================================================================

/// Extracts the affine part of a 4x4 homogeneous transformation matrix,
/// that is the 3x3 block `A` of `M = [A t; 0 1]`.
#[must_use]
pub fn linear_part(m: &Matrix4) -> Matrix3 {
    m.fixed_view::<3, 3>(0, 0).into_owned()
}

/// Completes `x` to an orthonormal right-handed frame and returns the 3x3
/// matrix with the frame vectors as columns (the first being `x` normalized).
///
/// The second axis is derived from the world Y axis, or the world X axis
/// when `x` is within ~18° of Y.
///
/// # Errors
///
/// Returns [`MathError::ZeroVector`] if `x` has zero length.
pub fn frame_with_x_axis(x: &Vector3) -> Result<Matrix3> {
    let x = x
        .try_normalize(f32::EPSILON)
        .ok_or(MathError::ZeroVector)?;

    let mut z = x.cross(&Vector3::y());
    if x.dot(&Vector3::y()).abs() > 0.95 {
        z = x.cross(&Vector3::x());
    }
    let y = z.cross(&x);
    Ok(Matrix3::from_columns(&[x, y.normalize(), z.normalize()]))
}

/// Completes `y` to an orthonormal right-handed frame and returns the 3x3
/// matrix with the frame vectors as columns (the second being `y` normalized).
///
/// # Errors
///
/// Returns [`MathError::ZeroVector`] if `y` has zero length.
pub fn frame_with_y_axis(y: &Vector3) -> Result<Matrix3> {
    let y = y
        .try_normalize(f32::EPSILON)
        .ok_or(MathError::ZeroVector)?;

    let mut z = Vector3::x().cross(&y);
    if Vector3::x().dot(&y).abs() > 0.95 {
        z = Vector3::y().cross(&y);
    }
    let x = y.cross(&z);
    Ok(Matrix3::from_columns(&[x.normalize(), y, z.normalize()]))
}
