mod intersect;

pub use intersect::{intersect, IntersectOutcome};

use crate::diagnostics::DiagnosticSink;
use crate::error::{MathError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// A point as a 3D shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3D {
    pub position: Point3,
}

impl Point3D {
    /// Wraps a point as a shape.
    #[must_use]
    pub fn new(position: Point3) -> Self {
        Self { position }
    }
}

/// A plane in 3D space, represented in normal form.
///
/// The normal is stored as given and need not be unit length; operations
/// that require a unit normal normalize on the fly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// A point on the plane.
    pub point: Point3,
    /// The plane normal.
    pub normal: Vector3,
}

impl Plane {
    /// Creates a new plane from a point on the plane and a normal.
    #[must_use]
    pub fn new(point: Point3, normal: Vector3) -> Self {
        Self { point, normal }
    }

    /// Returns a copy of the plane with its normal flipped.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            point: self.point,
            normal: -self.normal,
        }
    }

    /// Signed distance from `x` to the plane, scaled by the normal length.
    ///
    /// Positive on the side the normal points to.
    #[must_use]
    pub fn signed_distance_to(&self, x: &Point3) -> f32 {
        x.coords.dot(&self.normal) - self.point.coords.dot(&self.normal)
    }

    /// Absolute value of [`signed_distance_to`](Self::signed_distance_to).
    #[must_use]
    pub fn unsigned_distance_to(&self, x: &Point3) -> f32 {
        self.signed_distance_to(x).abs()
    }

    /// Returns true if `x` lies on the side the normal points to,
    /// or on the plane itself.
    #[must_use]
    pub fn is_in_positive_half_space(&self, x: &Point3) -> bool {
        self.signed_distance_to(x) >= 0.0
    }
}

/// A sphere in 3D space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Point3,
    pub radius: f32,
}

impl Sphere {
    /// Creates a new sphere from its center and radius.
    #[must_use]
    pub fn new(center: Point3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Returns true if `p` lies inside or on the sphere.
    #[must_use]
    pub fn contains(&self, p: &Point3) -> bool {
        (p - self.center).norm_squared() <= self.radius * self.radius
    }
}

/// A line segment between two points in 3D space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment3D {
    pub start: Point3,
    pub end: Point3,
}

impl Segment3D {
    /// Creates a new segment between `start` and `end`.
    #[must_use]
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }
}

/// A ray in 3D space, represented by a starting point and a direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray3D {
    /// The starting point of the ray.
    origin: Point3,
    /// The normalized direction in which the ray is pointing.
    direction: Vector3,
}

impl Ray3D {
    /// Creates a new ray from its starting point and a direction.
    ///
    /// The direction is normalized.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ZeroVector`] if `direction` has zero length.
    pub fn new(origin: Point3, direction: Vector3) -> Result<Self> {
        let direction = direction
            .try_normalize(TOLERANCE)
            .ok_or(MathError::ZeroVector)?;
        Ok(Self { origin, direction })
    }

    /// Builds a ray from a direction that is already unit length.
    pub(crate) fn from_unit(origin: Point3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Returns the starting point of the ray.
    #[must_use]
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// Returns the normalized direction of the ray.
    #[must_use]
    pub fn direction(&self) -> Vector3 {
        self.direction
    }

    /// Evaluates a point on the ray as `origin + lambda * direction`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::NegativeRayParameter`] if `lambda` is negative;
    /// the ray does not extend behind its origin. The intersection
    /// algorithms that treat a ray as an infinite line use
    /// [`line_eval`](Self::line_eval) instead.
    pub fn eval(&self, lambda: f32) -> Result<Point3> {
        if lambda < 0.0 {
            return Err(MathError::NegativeRayParameter { lambda }.into());
        }
        Ok(self.line_eval(lambda))
    }

    /// Evaluates a point on the supporting line of the ray.
    ///
    /// Unlike [`eval`](Self::eval), `lambda` may be negative here.
    #[must_use]
    pub fn line_eval(&self, lambda: f32) -> Point3 {
        self.origin + self.direction * lambda
    }

    /// Returns the distance between the supporting line of the ray and `p`.
    #[must_use]
    pub fn distance_to(&self, p: &Point3) -> f32 {
        let lambda = (p - self.origin).dot(&self.direction);
        let q = self.origin + self.direction * lambda;
        (q - p).norm()
    }
}

/// A 3D shape, the closed set of variants the intersection kernel knows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape3D {
    Point(Point3D),
    Ray(Ray3D),
    Plane(Plane),
    Sphere(Sphere),
    Segment(Segment3D),
}

impl Shape3D {
    /// Short name of the shape kind, used in diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Point(_) => "point",
            Self::Ray(_) => "ray",
            Self::Plane(_) => "plane",
            Self::Sphere(_) => "sphere",
            Self::Segment(_) => "segment",
        }
    }

    /// Intersects this shape with `other`.
    ///
    /// See [`intersect`] for the outcome contract.
    #[must_use]
    pub fn intersect(&self, other: &Self, diag: &dyn DiagnosticSink) -> IntersectOutcome {
        intersect(self, other, diag)
    }
}

impl From<Point3D> for Shape3D {
    fn from(p: Point3D) -> Self {
        Self::Point(p)
    }
}

impl From<Ray3D> for Shape3D {
    fn from(r: Ray3D) -> Self {
        Self::Ray(r)
    }
}

impl From<Plane> for Shape3D {
    fn from(p: Plane) -> Self {
        Self::Plane(p)
    }
}

impl From<Sphere> for Shape3D {
    fn from(s: Sphere) -> Self {
        Self::Sphere(s)
    }
}

impl From<Segment3D> for Shape3D {
    fn from(s: Segment3D) -> Self {
        Self::Segment(s)
    }
}
