use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::math::{Isometry, Real};
use crate::shape::{Ball, Capsule, ConvexHull, Cuboid};
use downcast_rs::{impl_downcast, DowncastSync};
use num_derive::FromPrimitive;

#[derive(Copy, Clone, Debug, PartialEq, Eq, FromPrimitive)]
/// Enum representing the type of a shape.
pub enum ShapeType {
    /// A ball shape.
    Ball = 0,
    /// A cuboid shape.
    Cuboid,
    /// A capsule shape.
    Capsule,
    /// A convex hull of a point cloud.
    ConvexHull,
    /// A custom user-defined shape.
    Custom,
}

/// Trait implemented by every shape the collision pipeline can handle.
///
/// The pipeline itself only ever looks at the conservative bounding volumes
/// exposed here; anything finer than that belongs to a concrete narrow-phase
/// backend, which may downcast to the exact shape type it knows about.
pub trait Shape: DowncastSync {
    /// Computes the Aabb of this shape in its local-space.
    fn compute_local_aabb(&self) -> Aabb;

    /// Computes the bounding-sphere of this shape in its local-space.
    fn compute_local_bounding_sphere(&self) -> BoundingSphere;

    /// Computes the Aabb of this shape with the transform `position`.
    fn compute_aabb(&self, position: &Isometry<Real>) -> Aabb {
        self.compute_local_aabb().transform_by(position)
    }

    /// Computes the bounding-sphere of this shape with the transform `position`.
    fn compute_bounding_sphere(&self, position: &Isometry<Real>) -> BoundingSphere {
        self.compute_local_bounding_sphere().transform_by(position)
    }

    /// The type of this shape.
    fn shape_type(&self) -> ShapeType;
}

impl_downcast!(sync Shape);

impl dyn Shape {
    /// Converts this abstract shape into a ball, if it is one.
    pub fn as_ball(&self) -> Option<&Ball> {
        self.downcast_ref()
    }

    /// Converts this abstract shape into a cuboid, if it is one.
    pub fn as_cuboid(&self) -> Option<&Cuboid> {
        self.downcast_ref()
    }

    /// Converts this abstract shape into a capsule, if it is one.
    pub fn as_capsule(&self) -> Option<&Capsule> {
        self.downcast_ref()
    }

    /// Converts this abstract shape into a convex hull, if it is one.
    pub fn as_convex_hull(&self) -> Option<&ConvexHull> {
        self.downcast_ref()
    }
}
