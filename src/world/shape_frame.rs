use crate::math::{Isometry, Real};
use crate::shape::SharedShape;
use std::fmt;
use std::sync::{Arc, RwLock};

/// One collidable shape's pose+geometry binding, owned by the external body
/// model.
///
/// The collision pipeline never looks at a frame beyond this trait. In a full
/// physics engine the implementor is the body/skeleton model; the pose is
/// re-read on every query, so a frame that moves between queries moves its
/// collision object with it.
pub trait ShapeFrame: Send + Sync {
    /// The shape bound to this frame.
    fn shape(&self) -> SharedShape;

    /// The current world-space pose of this frame.
    fn position(&self) -> Isometry<Real>;
}

/// A shared, stable handle to an externally-owned shape frame.
///
/// The handle's *identity*, not its contents, keys every cache in this
/// crate: two distinct handles are two distinct collidables even when their
/// geometry is identical.
pub type ShapeFrameHandle = Arc<dyn ShapeFrame>;

/// The identity of a [`ShapeFrameHandle`].
///
/// Stable for as long as any handle or collision object referencing the
/// frame is alive.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeFrameId(usize);

impl ShapeFrameId {
    /// The identity of `frame`.
    pub fn of(frame: &ShapeFrameHandle) -> Self {
        ShapeFrameId(Arc::as_ptr(frame) as *const () as usize)
    }
}

impl fmt::Debug for ShapeFrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShapeFrameId({:#x})", self.0)
    }
}

/// A free-standing [`ShapeFrame`]: a shape plus a settable pose.
///
/// This is the frame type used by the test-suites and examples; an engine
/// embedding this crate typically implements [`ShapeFrame`] on its own body
/// model instead.
pub struct SimpleShapeFrame {
    shape: SharedShape,
    position: RwLock<Isometry<Real>>,
}

impl SimpleShapeFrame {
    /// Creates a frame from a shape and its initial pose.
    pub fn new(shape: SharedShape, position: Isometry<Real>) -> Self {
        SimpleShapeFrame {
            shape,
            position: RwLock::new(position),
        }
    }

    /// Creates a frame and wraps it as a [`ShapeFrameHandle`].
    pub fn new_handle(shape: SharedShape, position: Isometry<Real>) -> ShapeFrameHandle {
        Arc::new(Self::new(shape, position))
    }

    /// Re-poses this frame.
    pub fn set_position(&self, position: Isometry<Real>) {
        *self.position.write().expect("shape frame pose lock poisoned") = position;
    }
}

impl ShapeFrame for SimpleShapeFrame {
    fn shape(&self) -> SharedShape {
        self.shape.clone()
    }

    fn position(&self) -> Isometry<Real> {
        *self.position.read().expect("shape frame pose lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::{ShapeFrameHandle, ShapeFrameId, SimpleShapeFrame};
    use crate::math::Isometry;
    use crate::shape::SharedShape;

    #[test]
    fn identity_follows_the_handle_not_the_geometry() {
        let frame1 = SimpleShapeFrame::new_handle(SharedShape::ball(1.0), Isometry::identity());
        let frame2 = SimpleShapeFrame::new_handle(SharedShape::ball(1.0), Isometry::identity());

        assert_ne!(ShapeFrameId::of(&frame1), ShapeFrameId::of(&frame2));

        let alias: ShapeFrameHandle = frame1.clone();
        assert_eq!(ShapeFrameId::of(&frame1), ShapeFrameId::of(&alias));
    }
}
