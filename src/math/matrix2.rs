//! Error-typed inversion for the [`Matrix2`] alias.
//!
//! Construction, products and element access are nalgebra's own surface
//! (`Matrix2::new`, `*`, `*=`, indexing). Inversion gets explicit value- and
//! in-place variants here because it is the one operation that can fail:
//! a matrix whose determinant is exactly zero has no inverse. There is no
//! tolerance in that check; callers that want an epsilon test must compare
//! the determinant with [`scalar::equals`](super::scalar::equals) first.

use super::Matrix2;
use crate::error::{MathError, Result};

/// Returns a new matrix that is the inverse of `m`.
///
/// # Errors
///
/// Returns [`MathError::NotInvertible`] if the determinant of `m` is zero.
pub fn invert(m: &Matrix2) -> Result<Matrix2> {
    m.try_inverse().ok_or_else(|| MathError::NotInvertible.into())
}

/// Replaces `m` with its inverse in place.
///
/// The value-returning dual is [`invert`]. On error `m` is left unchanged.
///
/// # Errors
///
/// Returns [`MathError::NotInvertible`] if the determinant of `m` is zero.
pub fn invert_in_place(m: &mut Matrix2) -> Result<()> {
    if m.try_inverse_mut() {
        Ok(())
    } else {
        Err(MathError::NotInvertible.into())
    }
}
