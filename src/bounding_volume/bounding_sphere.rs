//! Bounding sphere.

use crate::math::{Isometry, Point, Real};

/// A Bounding Sphere.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BoundingSphere {
    /// The center of this bounding sphere.
    pub center: Point<Real>,
    /// The radius of this bounding sphere.
    pub radius: Real,
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    pub fn new(center: Point<Real>, radius: Real) -> BoundingSphere {
        BoundingSphere { center, radius }
    }

    /// The bounding sphere center.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The bounding sphere radius.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Does this bounding sphere intersect `other`?
    ///
    /// Spheres touching at a single point are considered intersecting.
    #[inline]
    pub fn intersects(&self, other: &BoundingSphere) -> bool {
        let sum_radius = self.radius + other.radius;
        na::distance_squared(&self.center, &other.center) <= sum_radius * sum_radius
    }

    /// Transforms this bounding sphere by `m`.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> BoundingSphere {
        BoundingSphere::new(m * self.center, self.radius)
    }
}
