use crate::math::{Isometry, Real};
use crate::query::CollisionObjectData;
use crate::shape::SharedShape;
use crate::world::{CollisionDetector, ShapeFrameHandle, ShapeFrameId};
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// One shape frame's presence in a collision world.
///
/// A collision object pairs the externally-owned frame with the payload the
/// narrow-phase backend baked for it. Its identity is fixed at construction;
/// the pose is re-read from the frame on every access.
pub struct CollisionObject {
    frame: ShapeFrameHandle,
    frame_id: ShapeFrameId,
    data: Box<dyn CollisionObjectData>,
}

impl CollisionObject {
    pub(crate) fn new(frame: ShapeFrameHandle, data: Box<dyn CollisionObjectData>) -> Self {
        let frame_id = ShapeFrameId::of(&frame);
        CollisionObject {
            frame,
            frame_id,
            data,
        }
    }

    /// The shape frame this object represents.
    pub fn shape_frame(&self) -> &ShapeFrameHandle {
        &self.frame
    }

    /// The identity of the shape frame this object represents.
    pub fn frame_id(&self) -> ShapeFrameId {
        self.frame_id
    }

    /// The shape bound to this object's frame.
    pub fn shape(&self) -> SharedShape {
        self.frame.shape()
    }

    /// The current world-space pose of this object.
    pub fn position(&self) -> Isometry<Real> {
        self.frame.position()
    }

    /// The backend-specific data baked into this object.
    pub fn data(&self) -> &dyn CollisionObjectData {
        &*self.data
    }
}

impl fmt::Debug for CollisionObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollisionObject")
            .field("frame", &self.frame_id)
            .field("shape", &self.shape().shape_type())
            .finish()
    }
}

pub(crate) struct ObjectInner {
    pub(crate) object: CollisionObject,
    pub(crate) detector: Arc<CollisionDetector>,
    pub(crate) shared: bool,
}

impl Drop for ObjectInner {
    fn drop(&mut self) {
        // The notification must reach the backend while the object is still
        // fully alive; the backend data is dropped together with `object`
        // once this body returns.
        self.detector
            .dispatcher()
            .notify_collision_object_destroying(&self.object);

        if self.shared {
            self.detector.forget_collision_object(self.object.frame_id);
        }
    }
}

/// A shared owning reference to a [`CollisionObject`].
///
/// Handles are what callers and [`CollisionGroup`](crate::world::CollisionGroup)s
/// hold; cloning one only bumps a reference count. Releasing the last handle
/// notifies the owning detector's backend, erases the detector's cache entry
/// (under the shared policy) and only then tears the backend data down.
///
/// The handle dereferences to the [`CollisionObject`] it owns.
#[derive(Clone)]
pub struct CollisionObjectHandle {
    pub(crate) inner: Arc<ObjectInner>,
}

impl CollisionObjectHandle {
    /// The detector this object was claimed from.
    pub fn collision_detector(&self) -> &Arc<CollisionDetector> {
        &self.inner.detector
    }

    /// `true` when both handles reference the same underlying collision
    /// object.
    pub fn ptr_eq(a: &CollisionObjectHandle, b: &CollisionObjectHandle) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }
}

impl Deref for CollisionObjectHandle {
    type Target = CollisionObject;

    fn deref(&self) -> &CollisionObject {
        &self.inner.object
    }
}

impl PartialEq for CollisionObjectHandle {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl Eq for CollisionObjectHandle {}

impl fmt::Debug for CollisionObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner.object, f)
    }
}

static_assertions::assert_impl_all!(CollisionObjectHandle: Send, Sync);
