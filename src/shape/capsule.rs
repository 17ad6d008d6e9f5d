use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::math::{Point, Real};
use crate::shape::{Shape, ShapeType};

/// A capsule: every point at a distance at most `radius` from the segment `[a, b]`.
#[derive(PartialEq, Debug, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Capsule {
    /// The first endpoint of the capsule's principal axis, in local-space.
    pub a: Point<Real>,
    /// The second endpoint of the capsule's principal axis, in local-space.
    pub b: Point<Real>,
    /// The radius of the capsule.
    pub radius: Real,
}

impl Capsule {
    /// Creates a new capsule from the endpoints of its principal axis and its radius.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, radius: Real) -> Capsule {
        Capsule { a, b, radius }
    }

    /// The center of the capsule's principal axis.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.a, &self.b)
    }

    /// The half-length of the capsule's principal axis.
    #[inline]
    pub fn half_height(&self) -> Real {
        (self.b - self.a).norm() * 0.5
    }
}

impl Shape for Capsule {
    fn compute_local_aabb(&self) -> Aabb {
        let mins = self.a.coords.inf(&self.b.coords).add_scalar(-self.radius);
        let maxs = self.a.coords.sup(&self.b.coords).add_scalar(self.radius);
        Aabb::new(Point::from(mins), Point::from(maxs))
    }

    fn compute_local_bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(self.center(), self.half_height() + self.radius)
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Capsule
    }
}
