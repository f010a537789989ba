use std::sync::Arc;

use crate::math::{Aabb, Point3, Vector3};

/// An implicit CSG solid.
///
/// A solid is defined only by its interior-membership predicate
/// ([`Solid::inside`]) and a bounding box ([`Solid::bbox`]); it carries
/// no explicit boundary. Trees are immutable once built, and subtrees
/// are shared via [`Arc`], so the same primitive may appear under
/// several parents and a finished tree may be read by independent mesh
/// builds concurrently.
#[derive(Debug, Clone)]
pub enum Solid {
    /// An axis-aligned cube centered on the origin.
    Cube {
        /// Half the edge length.
        half_edge: f64,
    },
    /// A ball centered on the origin.
    ///
    /// A point is inside when its *squared* distance from the origin
    /// does not exceed `radius`, so the surface lies at distance
    /// `sqrt(radius)`. This is the membership rule of the modeler this
    /// kernel is compatible with; it is kept as-is.
    Sphere {
        /// Squared-distance bound for membership.
        radius: f64,
    },
    /// Points belonging to either child.
    Union {
        /// First operand.
        left: Arc<Solid>,
        /// Second operand.
        right: Arc<Solid>,
    },
    /// Points belonging to `left` but not `right`.
    Difference {
        /// Solid to carve from.
        left: Arc<Solid>,
        /// Solid removed from `left`.
        right: Arc<Solid>,
    },
    /// Points belonging to both children.
    Intersection {
        /// First operand.
        left: Arc<Solid>,
        /// Second operand.
        right: Arc<Solid>,
    },
    /// The child solid translated by an offset.
    Transform {
        /// Offset applied to the child.
        translation: Vector3,
        /// Solid being moved.
        child: Arc<Solid>,
    },
}

impl Solid {
    /// Creates a cube with the given half edge length.
    #[must_use]
    pub fn cube(half_edge: f64) -> Arc<Self> {
        Arc::new(Self::Cube { half_edge })
    }

    /// Creates a sphere with the given (squared-distance) radius bound.
    #[must_use]
    pub fn sphere(radius: f64) -> Arc<Self> {
        Arc::new(Self::Sphere { radius })
    }

    /// Creates the union of two solids.
    #[must_use]
    pub fn union_of(left: Arc<Self>, right: Arc<Self>) -> Arc<Self> {
        Arc::new(Self::Union { left, right })
    }

    /// Creates the difference `left - right`.
    #[must_use]
    pub fn difference(left: Arc<Self>, right: Arc<Self>) -> Arc<Self> {
        Arc::new(Self::Difference { left, right })
    }

    /// Creates the intersection of two solids.
    #[must_use]
    pub fn intersection(left: Arc<Self>, right: Arc<Self>) -> Arc<Self> {
        Arc::new(Self::Intersection { left, right })
    }

    /// Translates a solid by `translation`.
    #[must_use]
    pub fn translate(translation: Vector3, child: Arc<Self>) -> Arc<Self> {
        Arc::new(Self::Transform { translation, child })
    }

    /// Returns true if `point` lies in the solid's interior or on its
    /// boundary.
    #[must_use]
    pub fn inside(&self, point: &Point3) -> bool {
        match self {
            Self::Cube { half_edge } => {
                point.x.abs() <= *half_edge
                    && point.y.abs() <= *half_edge
                    && point.z.abs() <= *half_edge
            }
            Self::Sphere { radius } => point.coords.norm_squared() <= *radius,
            Self::Union { left, right } => left.inside(point) || right.inside(point),
            Self::Difference { left, right } => left.inside(point) && !right.inside(point),
            Self::Intersection { left, right } => left.inside(point) && right.inside(point),
            Self::Transform { translation, child } => child.inside(&(point - translation)),
        }
    }

    /// Returns a bounding box of the solid.
    ///
    /// The box is tight for primitives and unions. For `Difference` and
    /// `Intersection` it is the left child's box, unconditionally: a
    /// conservative bound that callers must not assume to be tight.
    #[must_use]
    pub fn bbox(&self) -> Aabb {
        match self {
            Self::Cube { half_edge } => Aabb::centered(*half_edge),
            Self::Sphere { radius } => Aabb::centered(*radius),
            Self::Union { left, right } => left.bbox().merged(&right.bbox()),
            Self::Difference { left, .. } | Self::Intersection { left, .. } => left.bbox(),
            Self::Transform { translation, child } => child.bbox().translated(translation),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn cube_membership_is_max_norm() {
        let c = Solid::cube(1.0);
        assert!(c.inside(&p(1.0, -1.0, 1.0)));
        assert!(c.inside(&p(0.0, 0.3, -0.9)));
        assert!(!c.inside(&p(1.0001, 0.0, 0.0)));
        assert!(!c.inside(&p(0.5, 0.5, -1.1)));
    }

    #[test]
    fn sphere_membership_compares_squared_distance_to_radius() {
        // radius 4.0 bounds the *squared* distance, so the surface sits
        // at distance 2 from the origin.
        let s = Solid::sphere(4.0);
        assert!(s.inside(&p(1.9, 0.0, 0.0)));
        assert!(s.inside(&p(2.0, 0.0, 0.0)));
        assert!(!s.inside(&p(2.1, 0.0, 0.0)));
        assert!(!s.inside(&p(3.9, 0.0, 0.0)));
    }

    #[test]
    fn boolean_membership_algebra() {
        let a = Solid::cube(1.0);
        let b = Solid::translate(Vector3::new(1.0, 0.0, 0.0), Solid::cube(1.0));
        let inside_a_only = p(-0.5, 0.0, 0.0);
        let inside_both = p(0.5, 0.0, 0.0);
        let inside_b_only = p(1.5, 0.0, 0.0);
        let outside = p(3.0, 0.0, 0.0);

        let u = Solid::union_of(a.clone(), b.clone());
        assert!(u.inside(&inside_a_only));
        assert!(u.inside(&inside_both));
        assert!(u.inside(&inside_b_only));
        assert!(!u.inside(&outside));

        let d = Solid::difference(a.clone(), b.clone());
        assert!(d.inside(&inside_a_only));
        assert!(!d.inside(&inside_both));
        assert!(!d.inside(&inside_b_only));
        assert!(!d.inside(&outside));

        let i = Solid::intersection(a, b);
        assert!(!i.inside(&inside_a_only));
        assert!(i.inside(&inside_both));
        assert!(!i.inside(&inside_b_only));
        assert!(!i.inside(&outside));
    }

    #[test]
    fn transform_shifts_the_predicate() {
        let t = Vector3::new(1.0, 2.0, 3.0);
        let moved = Solid::translate(t, Solid::cube(1.0));
        let base = Solid::cube(1.0);
        for q in [p(1.0, 2.0, 3.0), p(2.0, 3.0, 4.0), p(0.0, 0.0, 0.0)] {
            assert_eq!(moved.inside(&q), base.inside(&(q - t)));
        }
    }

    #[test]
    fn primitive_bboxes() {
        let c = Solid::cube(2.0).bbox();
        assert_relative_eq!(c.min, p(-2.0, -2.0, -2.0));
        assert_relative_eq!(c.max, p(2.0, 2.0, 2.0));

        let s = Solid::sphere(1.5).bbox();
        assert_relative_eq!(s.min, p(-1.5, -1.5, -1.5));
        assert_relative_eq!(s.max, p(1.5, 1.5, 1.5));
    }

    #[test]
    fn union_bbox_merges_children() {
        let a = Solid::cube(1.0);
        let b = Solid::translate(Vector3::new(3.0, 0.0, 0.0), Solid::cube(1.0));
        let u = Solid::union_of(a, b).bbox();
        assert_relative_eq!(u.min, p(-1.0, -1.0, -1.0));
        assert_relative_eq!(u.max, p(4.0, 1.0, 1.0));
    }

    #[test]
    fn difference_and_intersection_use_left_bbox() {
        let a = Solid::cube(1.0);
        let b = Solid::translate(Vector3::new(5.0, 5.0, 5.0), Solid::sphere(1.0));
        let left = a.bbox();
        assert_eq!(Solid::difference(a.clone(), b.clone()).bbox(), left);
        assert_eq!(Solid::intersection(a, b).bbox(), left);
    }

    #[test]
    fn transform_bbox_is_translated_child_bbox() {
        let t = Vector3::new(-1.0, 0.5, 2.0);
        let moved = Solid::translate(t, Solid::sphere(2.0)).bbox();
        assert_eq!(moved, Solid::sphere(2.0).bbox().translated(&t));
    }

    #[test]
    fn subtree_sharing() {
        let ball = Solid::sphere(1.0);
        let two = Solid::union_of(
            Solid::translate(Vector3::new(-2.0, 0.0, 0.0), ball.clone()),
            Solid::translate(Vector3::new(2.0, 0.0, 0.0), ball),
        );
        assert!(two.inside(&p(-2.0, 0.0, 0.0)));
        assert!(two.inside(&p(2.0, 0.0, 0.0)));
        assert!(!two.inside(&p(0.0, 0.0, 0.0)));
    }
}
