//! Axis Aligned Bounding Box.

use crate::math::{Isometry, Point, Real, Vector, DIM};
use num::Bounded;

/// An Axis-Aligned Bounding Box.
///
/// The box is defined by its minimum and maximum corners, with
/// `mins[i] <= maxs[i]` on every axis for a valid box.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// The minimum of the Aabb.
    pub mins: Point<Real>,
    /// The maximum of the Aabb.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new Aabb.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid Aabb with `mins` components set to `Real::MAX` and `maxs` components
    /// set to `-Real::MAX`.
    ///
    /// This is often used as the initial value of some Aabb merging algorithms.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Point::from(Vector::repeat(Real::max_value())),
            Point::from(Vector::repeat(-Real::max_value())),
        )
    }

    /// Creates a new Aabb from its center and its half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Computes the Aabb of a set of points.
    pub fn from_points(points: &[Point<Real>]) -> Self {
        let mut result = Self::new_invalid();

        for point in points {
            result.mins = Point::from(result.mins.coords.inf(&point.coords));
            result.maxs = Point::from(result.maxs.coords.sup(&point.coords));
        }

        result
    }

    /// The center of this Aabb.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half extents of this Aabb.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        (self.maxs - self.mins) * 0.5
    }

    /// The extents of this Aabb.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Does this Aabb intersect `other`?
    ///
    /// Boxes sharing only a boundary are considered intersecting.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        for i in 0..DIM {
            if self.mins[i] > other.maxs[i] || other.mins[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }

    /// The smallest Aabb enclosing both `self` and `other`.
    #[inline]
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: Point::from(self.mins.coords.inf(&other.mins.coords)),
            maxs: Point::from(self.maxs.coords.sup(&other.maxs.coords)),
        }
    }

    /// The Aabb covered by both `self` and `other`, if they intersect.
    #[inline]
    pub fn intersection(&self, other: &Aabb) -> Option<Aabb> {
        let result = Aabb {
            mins: Point::from(self.mins.coords.sup(&other.mins.coords)),
            maxs: Point::from(self.maxs.coords.inf(&other.maxs.coords)),
        };

        for i in 0..DIM {
            if result.mins[i] > result.maxs[i] {
                return None;
            }
        }

        Some(result)
    }

    /// Computes the Aabb bounding `self` transformed by `m`.
    ///
    /// The result is conservative: it bounds the rotated box instead of
    /// rotating with it.
    pub fn transform_by(&self, m: &Isometry<Real>) -> Self {
        let ws_center = m * self.center();
        let ws_half_extents = m.rotation.to_rotation_matrix().into_inner().abs() * self.half_extents();

        Aabb::from_half_extents(ws_center, ws_half_extents)
    }
}
