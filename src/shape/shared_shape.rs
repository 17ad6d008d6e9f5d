use crate::math::{Point, Real, Vector};
use crate::shape::{Ball, Capsule, ConvexHull, ConvexHullBuilderError, Cuboid, Shape};
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A reference-counted, shareable geometric shape.
///
/// Cloning a `SharedShape` only increments a reference count: the geometry is
/// stored once and shared by every clone, which is what makes it cheap for a
/// single shape to back several shape frames.
#[derive(Clone)]
pub struct SharedShape(pub Arc<dyn Shape>);

impl Deref for SharedShape {
    type Target = dyn Shape;
    fn deref(&self) -> &dyn Shape {
        &*self.0
    }
}

impl AsRef<dyn Shape> for SharedShape {
    fn as_ref(&self) -> &dyn Shape {
        &*self.0
    }
}

impl fmt::Debug for SharedShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedShape ( Arc<{:?}> )", self.0.shape_type())
    }
}

impl SharedShape {
    /// Wraps the given shape as a `SharedShape`.
    pub fn new(shape: impl Shape) -> Self {
        Self(Arc::new(shape))
    }

    /// Initializes a ball shape defined by its radius.
    pub fn ball(radius: Real) -> Self {
        SharedShape(Arc::new(Ball::new(radius)))
    }

    /// Initializes a cuboid shape defined by its half-extents.
    #[cfg(feature = "dim2")]
    pub fn cuboid(hx: Real, hy: Real) -> Self {
        SharedShape(Arc::new(Cuboid::new(Vector::new(hx, hy))))
    }

    /// Initializes a cuboid shape defined by its half-extents.
    #[cfg(feature = "dim3")]
    pub fn cuboid(hx: Real, hy: Real, hz: Real) -> Self {
        SharedShape(Arc::new(Cuboid::new(Vector::new(hx, hy, hz))))
    }

    /// Initializes a capsule shape from its endpoints and radius.
    pub fn capsule(a: Point<Real>, b: Point<Real>, radius: Real) -> Self {
        SharedShape(Arc::new(Capsule::new(a, b, radius)))
    }

    /// Initializes a capsule shape aligned with the `x` axis.
    pub fn capsule_x(half_height: Real, radius: Real) -> Self {
        let p = Point::from(Vector::x() * half_height);
        Self::capsule(-p, p, radius)
    }

    /// Initializes a capsule shape aligned with the `y` axis.
    pub fn capsule_y(half_height: Real, radius: Real) -> Self {
        let p = Point::from(Vector::y() * half_height);
        Self::capsule(-p, p, radius)
    }

    /// Initializes a shape bounded by the convex hull of a point cloud.
    pub fn convex_hull(points: Vec<Point<Real>>) -> Result<Self, ConvexHullBuilderError> {
        Ok(SharedShape(Arc::new(ConvexHull::try_new(points)?)))
    }
}

static_assertions::assert_impl_all!(SharedShape: Send, Sync);
