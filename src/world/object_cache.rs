use crate::query::ObjectSharing;
use crate::world::collision_object::ObjectInner;
use crate::world::{CollisionObjectHandle, ShapeFrameId};
use std::collections::HashMap;
use std::sync::Weak;

/// The detector-internal cache mapping shape frames to live collision
/// objects.
///
/// Under the exclusive policy the map stays empty. Under the shared policy it
/// holds one non-owning entry per live object; the cache never keeps an
/// object alive, ownership stays entirely with the handles. The map is only
/// ever addressed by key, so its iteration order is irrelevant.
pub(crate) struct ObjectCache {
    sharing: ObjectSharing,
    objects: HashMap<ShapeFrameId, Weak<ObjectInner>>,
}

impl ObjectCache {
    pub(crate) fn new(sharing: ObjectSharing) -> Self {
        ObjectCache {
            sharing,
            objects: HashMap::new(),
        }
    }

    pub(crate) fn sharing(&self) -> ObjectSharing {
        self.sharing
    }

    /// Looks up the live object of `id`. `None` means "construct a new one".
    ///
    /// A dead entry is a bookkeeping fault: releases erase their entry before
    /// the object goes away, so an un-upgradable weak reference can only mean
    /// the cache state is corrupted, and we abort.
    pub(crate) fn lookup(&self, id: ShapeFrameId) -> Option<CollisionObjectHandle> {
        if self.sharing == ObjectSharing::Exclusive {
            return None;
        }

        self.objects.get(&id).map(|weak| {
            let inner = weak.upgrade().unwrap_or_else(|| {
                panic!(
                    "the object cache holds a dead entry for {:?}; \
                     it should have been erased when the object was released",
                    id
                )
            });
            CollisionObjectHandle { inner }
        })
    }

    /// Registers the object of `id` in the map.
    pub(crate) fn remember(&mut self, id: ShapeFrameId, object: &CollisionObjectHandle) {
        debug_assert_eq!(self.sharing, ObjectSharing::Shared);
        let previous = self
            .objects
            .insert(id, std::sync::Arc::downgrade(&object.inner));
        debug_assert!(
            previous.is_none(),
            "two live collision objects registered for one shape frame"
        );
    }

    /// Erases the entry of `id`, by key: a release may interleave with
    /// insertions of other shape frames, so entries are never erased through
    /// iterators.
    pub(crate) fn forget(&mut self, id: ShapeFrameId) {
        let removed = self.objects.remove(&id);
        debug_assert!(
            removed.is_some(),
            "released a shared collision object that was not registered"
        );
    }
}

impl Drop for ObjectCache {
    fn drop(&mut self) {
        // Groups and claimed handles must be gone before their detector;
        // every release erases its entry, so an empty map is the only sane
        // final state.
        debug_assert!(
            self.objects.is_empty(),
            "the object cache was dropped while {} collision object(s) were still alive",
            self.objects.len()
        );
    }
}
