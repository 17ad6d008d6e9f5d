use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::math::{Point, Real, Vector};
use crate::shape::{Shape, ShapeType};

/// A cuboid (box in 3D, rectangle in 2D) centered at the origin of its local-space.
#[derive(PartialEq, Debug, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Cuboid {
    /// The half-extents of the cuboid.
    pub half_extents: Vector<Real>,
}

impl Cuboid {
    /// Creates a new cuboid from its half-extents.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        Cuboid { half_extents }
    }
}

impl Shape for Cuboid {
    fn compute_local_aabb(&self) -> Aabb {
        Aabb::from_half_extents(Point::origin(), self.half_extents)
    }

    fn compute_local_bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(Point::origin(), self.half_extents.norm())
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Cuboid
    }
}
