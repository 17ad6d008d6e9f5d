use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::math::{Point, Real, Vector};
use crate::shape::{Shape, ShapeType};

/// A ball shape (sphere in 3D, disk in 2D) centered at the origin of its local-space.
#[derive(PartialEq, Debug, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Ball {
    /// The radius of the ball.
    pub radius: Real,
}

impl Ball {
    /// Creates a new ball from its radius.
    #[inline]
    pub fn new(radius: Real) -> Ball {
        Ball { radius }
    }
}

impl Shape for Ball {
    fn compute_local_aabb(&self) -> Aabb {
        let half_extents = Vector::repeat(self.radius);
        Aabb::from_half_extents(Point::origin(), half_extents)
    }

    fn compute_local_bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(Point::origin(), self.radius)
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Ball
    }
}
