use super::{matrix2, Matrix2, Point2, Vector2, TOLERANCE};
use crate::error::{MathError, Result};

/// The two line parameters of an intersection point.
///
/// `lambda1` belongs to the line on which `intersect` was called, `lambda2`
/// to the line passed as the argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineIntersection {
    pub lambda1: f32,
    pub lambda2: f32,
}

/// A line of infinite length in 2D space,
/// represented by a position and a direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2 {
    /// A fixed but arbitrary point on the line.
    position: Point2,
    /// The normalized direction in which the line is pointing.
    direction: Vector2,
}

impl Line2 {
    /// Creates a new line from any point on the line and a direction.
    ///
    /// The direction is normalized.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ZeroVector`] if `direction` has zero length.
    pub fn new(position: Point2, direction: Vector2) -> Result<Self> {
        let direction = direction
            .try_normalize(TOLERANCE)
            .ok_or(MathError::ZeroVector)?;
        Ok(Self {
            position,
            direction,
        })
    }

    /// Returns a fixed but arbitrary point on the line.
    #[must_use]
    pub fn position(&self) -> Point2 {
        self.position
    }

    /// Returns the normalized direction of the line.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.direction
    }

    /// Evaluates a point on the line as `position + lambda * direction`.
    #[must_use]
    pub fn evaluate(&self, lambda: f32) -> Point2 {
        self.position + self.direction * lambda
    }

    /// Calculates the intersection point between this and the other line.
    ///
    /// Solves `b = A·x` where the columns of `A` are the two directions and
    /// `b` the offset between the two positions. Parallel lines have a
    /// singular `A` and no intersection; that is an expected outcome
    /// reported as `None`, not an error.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<LineIntersection> {
        let mut a = Matrix2::new(
            self.direction.x,
            -other.direction.x,
            self.direction.y,
            -other.direction.y,
        );
        if matrix2::invert_in_place(&mut a).is_err() {
            // no solution, the lines are parallel
            return None;
        }

        let b = other.position - self.position;
        let x = a * b;
        Some(LineIntersection {
            lambda1: x.x,
            lambda2: x.y,
        })
    }
}

/// A ray in 2D space, represented by a starting point and a direction.
///
/// A ray is the restriction of a line to the non-negative parameter domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray2 {
    /// The starting point of the ray.
    origin: Point2,
    /// The normalized direction in which the ray is pointing.
    direction: Vector2,
}

impl Ray2 {
    /// Creates a new ray from its starting point and a direction.
    ///
    /// The direction is normalized.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ZeroVector`] if `direction` has zero length.
    pub fn new(origin: Point2, direction: Vector2) -> Result<Self> {
        let direction = direction
            .try_normalize(TOLERANCE)
            .ok_or(MathError::ZeroVector)?;
        Ok(Self { origin, direction })
    }

    /// Returns the starting point of the ray.
    #[must_use]
    pub fn origin(&self) -> Point2 {
        self.origin
    }

    /// Returns the normalized direction of the ray.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.direction
    }

    /// Evaluates a point on the ray as `origin + lambda * direction`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::NegativeRayParameter`] if `lambda` is negative;
    /// the ray does not extend behind its origin.
    pub fn eval(&self, lambda: f32) -> Result<Point2> {
        if lambda < 0.0 {
            return Err(MathError::NegativeRayParameter { lambda }.into());
        }
        Ok(self.origin + self.direction * lambda)
    }

    /// Returns the distance between the supporting line of the ray and `p`.
    #[must_use]
    pub fn distance_to(&self, p: &Point2) -> f32 {
        let lambda = (p - self.origin).dot(&self.direction);
        let q = self.origin + self.direction * lambda;
        (q - p).norm()
    }

    /// Creates a new line extending this ray.
    #[must_use]
    pub fn to_line(&self) -> Line2 {
        Line2 {
            position: self.origin,
            direction: self.direction,
        }
    }

    /// Calculates the intersection point between this and the other ray.
    ///
    /// Returns `None` if the rays are parallel, or if the supporting lines
    /// cross at a point that lies behind either ray's origin.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<LineIntersection> {
        let intersection = self.to_line().intersect(&other.to_line())?;
        if intersection.lambda1 < 0.0 || intersection.lambda2 < 0.0 {
            // intersection point does not lie on both rays
            return None;
        }
        Some(intersection)
    }
}
