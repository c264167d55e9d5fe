use super::{Point3, Vector3};

/// An axis-aligned bounding box in 3D space.
///
/// Starts out empty and grows to enclose every point it is fed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Lower corner (smallest x, y, z values).
    min: Point3,
    /// Upper corner (largest x, y, z values).
    max: Point3,
}

impl Aabb {
    /// Creates an empty box enclosing no points.
    ///
    /// An empty box has `min > max` on every axis, so the first
    /// [`expand_to_include`](Self::expand_to_include) snaps both corners
    /// onto the point.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            max: Point3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    /// Creates a zero-volume box around a single point.
    #[must_use]
    pub fn from_point(point: Point3) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Returns true while the box encloses no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x
    }

    /// Returns the lower corner, or `None` for an empty box.
    #[must_use]
    pub fn min(&self) -> Option<Point3> {
        (!self.is_empty()).then_some(self.min)
    }

    /// Returns the upper corner, or `None` for an empty box.
    #[must_use]
    pub fn max(&self) -> Option<Point3> {
        (!self.is_empty()).then_some(self.max)
    }

    /// Grows the box to enclose `point`.
    pub fn expand_to_include(&mut self, point: &Point3) {
        for i in 0..3 {
            if point[i] < self.min[i] {
                self.min[i] = point[i];
            }
            if point[i] > self.max[i] {
                self.max[i] = point[i];
            }
        }
    }

    /// Grows the box to enclose the whole `other` box.
    pub fn expand_to_include_box(&mut self, other: &Self) {
        if other.is_empty() {
            return;
        }
        self.expand_to_include(&other.min);
        self.expand_to_include(&other.max);
    }

    /// Returns the extent of the box along each axis,
    /// or `None` for an empty box.
    #[must_use]
    pub fn extent(&self) -> Option<Vector3> {
        (!self.is_empty()).then(|| self.max - self.min)
    }

    /// Returns the center of the box, or `None` for an empty box.
    #[must_use]
    pub fn center(&self) -> Option<Point3> {
        (!self.is_empty()).then(|| self.min + (self.max - self.min) / 2.0)
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}
