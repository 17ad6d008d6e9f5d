use crate::world::{CollisionDetector, CollisionObjectHandle, ShapeFrameHandle, ShapeFrameId};
use std::fmt;
use std::sync::Arc;

/// An ordered collection of collision objects queryable as one unit.
///
/// Groups are created by [`CollisionDetector::create_collision_group`] and
/// must only ever contain objects claimed from that same detector; mixing
/// detectors is a programmer error, not a recoverable condition.
///
/// Membership order is insertion order, and it matters: queries enumerate
/// pairs in that order, which is what makes results reproducible.
///
/// Membership is weak in the ownership sense only: a group owns handles, so
/// its members stay alive while it exists, but dropping the group never
/// destroys an object some other handle still references.
pub struct CollisionGroup {
    detector: Arc<CollisionDetector>,
    objects: Vec<CollisionObjectHandle>,
}

impl CollisionGroup {
    pub(crate) fn new(detector: Arc<CollisionDetector>) -> Self {
        CollisionGroup {
            detector,
            objects: Vec::new(),
        }
    }

    /// The detector this group was created by.
    pub fn collision_detector(&self) -> &Arc<CollisionDetector> {
        &self.detector
    }

    /// Adds a collision object to this group.
    ///
    /// An object already present is not added twice; an object claimed from
    /// another detector is rejected with a warning.
    pub fn add_object(&mut self, object: CollisionObjectHandle) {
        debug_assert!(
            Arc::ptr_eq(object.collision_detector(), &self.detector),
            "collision objects must not be mixed across detectors"
        );
        if !Arc::ptr_eq(object.collision_detector(), &self.detector) {
            log::warn!("ignoring a collision object claimed from another detector");
            return;
        }

        if self.contains(&object) {
            log::warn!("collision object {:?} is already in the group", *object);
            return;
        }

        self.objects.push(object);
    }

    /// Claims the collision object of `frame` from the owning detector and
    /// adds it to this group.
    pub fn add_shape_frame(&mut self, frame: &ShapeFrameHandle) {
        if self.has_shape_frame(frame) {
            log::warn!(
                "shape frame {:?} is already represented in the group",
                ShapeFrameId::of(frame)
            );
            return;
        }

        let object = self.detector.claim_collision_object(frame);
        self.objects.push(object);
    }

    /// Claims and adds the collision objects of several shape frames, in
    /// order.
    pub fn add_shape_frames(&mut self, frames: &[ShapeFrameHandle]) {
        for frame in frames {
            self.add_shape_frame(frame);
        }
    }

    /// Removes `object` from this group. Returns `true` when it was a
    /// member.
    pub fn remove_object(&mut self, object: &CollisionObjectHandle) -> bool {
        let before = self.objects.len();
        self.objects
            .retain(|member| !CollisionObjectHandle::ptr_eq(member, object));
        self.objects.len() != before
    }

    /// Removes every member representing `frame`. Returns `true` when
    /// something was removed.
    pub fn remove_shape_frame(&mut self, frame: &ShapeFrameHandle) -> bool {
        let id = ShapeFrameId::of(frame);
        let before = self.objects.len();
        self.objects.retain(|member| member.frame_id() != id);
        self.objects.len() != before
    }

    /// Removes every member of this group.
    pub fn remove_all(&mut self) {
        self.objects.clear();
    }

    /// `true` when `object` itself is a member of this group.
    pub fn contains(&self, object: &CollisionObjectHandle) -> bool {
        self.objects
            .iter()
            .any(|member| CollisionObjectHandle::ptr_eq(member, object))
    }

    /// `true` when some member represents `frame`.
    pub fn has_shape_frame(&self, frame: &ShapeFrameHandle) -> bool {
        let id = ShapeFrameId::of(frame);
        self.objects.iter().any(|member| member.frame_id() == id)
    }

    /// The members of this group, in insertion order.
    pub fn objects(&self) -> &[CollisionObjectHandle] {
        &self.objects
    }

    /// The number of members of this group.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// `true` when this group has no member.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl fmt::Debug for CollisionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollisionGroup")
            .field("objects", &self.objects)
            .finish_non_exhaustive()
    }
}
