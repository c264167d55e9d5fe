//! Pairwise intersection of 3D shapes.
//!
//! Each unordered pair of shape kinds maps to one algorithm; pairs without
//! an algorithm are reported as [`IntersectOutcome::Unsupported`] together
//! with a message to the diagnostic sink. An empty hit list is a valid
//! geometric answer (the shapes do not meet) and is distinct from
//! `Unsupported`.

use super::{Plane, Point3D, Ray3D, Shape3D, Sphere};
use crate::diagnostics::DiagnosticSink;
use crate::math::TOLERANCE;

/// Outcome of a pairwise shape intersection query.
#[derive(Debug, Clone, PartialEq)]
pub enum IntersectOutcome {
    /// The intersection was computed; zero, one or two shapes result.
    Hits(Vec<Shape3D>),
    /// No algorithm exists for this pair of shape kinds.
    Unsupported,
}

impl IntersectOutcome {
    /// Returns the resulting shapes, or `None` for an unsupported pair.
    #[must_use]
    pub fn hits(&self) -> Option<&[Shape3D]> {
        match self {
            Self::Hits(shapes) => Some(shapes),
            Self::Unsupported => None,
        }
    }

    /// Returns true if no algorithm exists for the queried pair.
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported)
    }
}

/// Intersects two shapes, dispatching on the pair of shape kinds.
///
/// The dispatch is symmetric: `intersect(a, b, ..)` and `intersect(b, a, ..)`
/// reach the same algorithm. Unsupported pairs (anything involving a point
/// or a segment, and sphere–sphere) send a message to `diag` and return
/// [`IntersectOutcome::Unsupported`].
#[must_use]
pub fn intersect(a: &Shape3D, b: &Shape3D, diag: &dyn DiagnosticSink) -> IntersectOutcome {
    match (a, b) {
        (Shape3D::Ray(ray), Shape3D::Plane(plane))
        | (Shape3D::Plane(plane), Shape3D::Ray(ray)) => ray_plane(ray, plane),
        (Shape3D::Ray(ray), Shape3D::Sphere(sphere))
        | (Shape3D::Sphere(sphere), Shape3D::Ray(ray)) => ray_sphere(ray, sphere),
        (Shape3D::Plane(p1), Shape3D::Plane(p2)) => plane_plane(p1, p2),
        _ => {
            diag.report(&format!(
                "intersection not implemented: {} <-> {}",
                a.kind(),
                b.kind()
            ));
            IntersectOutcome::Unsupported
        }
    }
}

/// Intersects a ray with a plane.
///
/// A ray parallel to the plane (within tolerance) yields no intersection.
/// The solved parameter is *not* required to be non-negative: the ray is
/// treated as its supporting infinite line, so a plane behind the ray
/// origin still yields a point. Callers needing strict ray semantics must
/// check the returned point against the ray themselves.
fn ray_plane(ray: &Ray3D, plane: &Plane) -> IntersectOutcome {
    let b = plane.normal.dot(&ray.direction());
    if b.abs() < TOLERANCE {
        return IntersectOutcome::Hits(Vec::new());
    }
    let a = plane.point.coords.dot(&plane.normal) - plane.normal.dot(&ray.origin().coords);
    let lambda = a / b;
    IntersectOutcome::Hits(vec![Point3D::new(ray.line_eval(lambda)).into()])
}

/// Intersects a ray (as its supporting line) with a sphere.
///
/// Reduces to a quadratic in the ray parameter and classifies by the
/// discriminant: negative yields no hit, zero the single tangent point,
/// positive the two crossing points (larger-parameter root first).
fn ray_sphere(ray: &Ray3D, sphere: &Sphere) -> IntersectOutcome {
    let a = sphere.center - ray.origin();
    let aa = a.dot(&a);
    let dd = ray.direction().dot(&ray.direction());
    let rr = sphere.radius * sphere.radius;

    // normalized quadratic lambda^2 + p*lambda + q = 0
    let p = -2.0 * a.dot(&ray.direction()) / dd;
    let q = (aa - rr) / dd;
    let below_square = p * p / 4.0 - q;

    if below_square < 0.0 {
        IntersectOutcome::Hits(Vec::new())
    } else if below_square == 0.0 {
        IntersectOutcome::Hits(vec![Point3D::new(ray.line_eval(-p / 2.0)).into()])
    } else {
        let root = below_square.sqrt();
        let lambda1 = -p / 2.0 + root;
        let lambda2 = -p / 2.0 - root;
        IntersectOutcome::Hits(vec![
            Point3D::new(ray.line_eval(lambda1)).into(),
            Point3D::new(ray.line_eval(lambda2)).into(),
        ])
    }
}

/// Intersects two planes.
///
/// Nearly parallel planes (normalized normals with a dot product above
/// `0.98`) yield no intersection. Otherwise the full intersection line is
/// returned, carried by a [`Ray3D`] whose origin is the closed-form point
/// nearest to the coordinate origin in the span of the two normals.
fn plane_plane(p1: &Plane, p2: &Plane) -> IntersectOutcome {
    let (Some(n1), Some(n2)) = (
        p1.normal.try_normalize(TOLERANCE),
        p2.normal.try_normalize(TOLERANCE),
    ) else {
        // a zero normal spans no plane
        return IntersectOutcome::Hits(Vec::new());
    };
    if n1.dot(&n2) > 0.98 {
        // planes parallel
        return IntersectOutcome::Hits(Vec::new());
    }

    let dir = p1.normal.cross(&p2.normal);
    let d1 = -p1.normal.dot(&p1.point.coords);
    let d2 = -p2.normal.dot(&p2.point.coords);
    let point = (p2.normal * d1 - p1.normal * d2).cross(&dir) * (-1.0 / dir.dot(&dir));

    let line = Ray3D::from_unit(point.into(), dir.normalize());
    IntersectOutcome::Hits(vec![line.into()])
}
