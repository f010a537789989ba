use super::{Point3, Vector3};

/// An axis-aligned bounding box.
///
/// Boxes produced by CSG evaluation may be conservative rather than
/// tight (see [`crate::solid::Solid::bbox`]); callers must not assume
/// the box hugs the solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Creates a bounding box from two corners.
    #[must_use]
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Creates a cube-shaped box centered on the origin with the given
    /// half edge length.
    #[must_use]
    pub fn centered(half_extent: f64) -> Self {
        Self {
            min: Point3::new(-half_extent, -half_extent, -half_extent),
            max: Point3::new(half_extent, half_extent, half_extent),
        }
    }

    /// Returns the smallest box containing both `self` and `other`.
    #[must_use]
    pub fn merged(&self, other: &Aabb) -> Self {
        Self {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Returns this box translated by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vector3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Returns the edge lengths along each axis.
    #[must_use]
    pub fn extent(&self) -> Vector3 {
        self.max - self.min
    }

    /// Returns the center of the box.
    #[must_use]
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Returns true if `point` lies inside or on the boundary of the box.
    #[must_use]
    pub fn contains(&self, point: &Point3) -> bool {
        (0..3).all(|i| point[i] >= self.min[i] && point[i] <= self.max[i])
    }

    /// Returns true if the box has a non-positive extent on any axis.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        (0..3).any(|i| self.min[i] >= self.max[i])
    }
}
