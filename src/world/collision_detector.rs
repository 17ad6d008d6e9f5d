use crate::query::{CollisionDispatcher, CollisionOption, CollisionResult, ObjectSharing};
use crate::world::collision_object::ObjectInner;
use crate::world::object_cache::ObjectCache;
use crate::world::{CollisionGroup, CollisionObject, CollisionObjectHandle, ShapeFrameHandle, ShapeFrameId};
use std::sync::{Arc, Mutex, Weak};

/// Lazily-created reusable state for the convenience queries.
///
/// One per detector. Convenience calls on one detector are serialized by the
/// scratch lock, so they are not reentrant: a collision filter must not call
/// back into the detector that is evaluating it.
struct ScratchQuery {
    option: CollisionOption,
    result: CollisionResult,
}

impl ScratchQuery {
    fn new() -> Self {
        ScratchQuery {
            option: CollisionOption::binary(),
            result: CollisionResult::new(),
        }
    }
}

/// The façade of one collision world.
///
/// A detector owns the narrow-phase backend it was built around, the cache of
/// collision objects claimed through it, and the scratch state of its
/// convenience queries. One detector instance exists per simulation world;
/// everything it hands out (objects, groups) stays tied to it.
///
/// No operation of a detector, its objects or its groups is safe for
/// concurrent invocation without external locking: the supported model is one
/// simulation step driving one detector sequentially.
pub struct CollisionDetector {
    dispatcher: Box<dyn CollisionDispatcher>,
    cache: Mutex<Option<ObjectCache>>,
    scratch: Mutex<Option<ScratchQuery>>,
    self_ref: Weak<CollisionDetector>,
}

impl CollisionDetector {
    /// Creates a detector around the given narrow-phase backend.
    pub fn new(dispatcher: impl CollisionDispatcher + 'static) -> Arc<Self> {
        Self::from_boxed(Box::new(dispatcher))
    }

    /// Creates a detector around an already-boxed narrow-phase backend.
    pub fn from_boxed(dispatcher: Box<dyn CollisionDispatcher>) -> Arc<Self> {
        Arc::new_cyclic(|self_ref| CollisionDetector {
            dispatcher,
            cache: Mutex::new(None),
            scratch: Mutex::new(None),
            self_ref: self_ref.clone(),
        })
    }

    fn self_arc(&self) -> Arc<CollisionDetector> {
        self.self_ref
            .upgrade()
            .expect("the collision detector was dropped while in use")
    }

    /// The narrow-phase backend behind this detector.
    pub fn dispatcher(&self) -> &dyn CollisionDispatcher {
        &*self.dispatcher
    }

    /// Creates a fresh, empty collision group exclusively owned by the
    /// caller.
    pub fn create_collision_group(&self) -> CollisionGroup {
        CollisionGroup::new(self.self_arc())
    }

    /// Returns the collision object representing `frame`.
    ///
    /// The object cache is created on first use with the backend's default
    /// sharing policy. Under the shared policy a frame whose object is still
    /// alive gets another handle to that same object; under the exclusive
    /// policy every claim bakes a new one. A claim for a frame whose previous
    /// object has been fully released behaves exactly like a first-ever
    /// claim.
    pub fn claim_collision_object(&self, frame: &ShapeFrameHandle) -> CollisionObjectHandle {
        let frame_id = ShapeFrameId::of(frame);

        let sharing = {
            let mut cache = self.cache.lock().expect("object cache lock poisoned");
            let cache = cache
                .get_or_insert_with(|| ObjectCache::new(self.dispatcher.default_object_sharing()));
            if let Some(existing) = cache.lookup(frame_id) {
                return existing;
            }
            cache.sharing()
        };

        // The bake runs unlocked: it may be expensive, and it must not block
        // releases of unrelated objects.
        let data = self.dispatcher.create_collision_object_data(frame);
        let object = CollisionObjectHandle {
            inner: Arc::new(ObjectInner {
                object: CollisionObject::new(frame.clone(), data),
                detector: self.self_arc(),
                shared: sharing == ObjectSharing::Shared,
            }),
        };

        if sharing == ObjectSharing::Shared {
            self.cache
                .lock()
                .expect("object cache lock poisoned")
                .as_mut()
                .expect("the object cache was initialized above")
                .remember(frame_id, &object);
        }

        object
    }

    /// Called from an object's release path; erases the shared-cache entry
    /// of `id` before the backend data is dropped.
    pub(crate) fn forget_collision_object(&self, id: ShapeFrameId) {
        if let Some(cache) = self
            .cache
            .lock()
            .expect("object cache lock poisoned")
            .as_mut()
        {
            cache.forget(id);
        }
    }

    /// Self-collision query over all distinct pairs of `group`.
    ///
    /// With `Some(result)` this is the fully-configured query: `option` is
    /// honored as-is and matches are appended to `result` (which is *not*
    /// cleared first; reuse is the caller's decision).
    ///
    /// With `None` the detector only answers the boolean question, as cheaply
    /// as possible: a non-binary `option` is converted into a forced binary
    /// check carrying only its filter, and the detector's internal scratch
    /// result absorbs the single record. Both forms return whether any pair
    /// matched.
    pub fn collide(
        &self,
        group: &CollisionGroup,
        option: &CollisionOption,
        result: Option<&mut CollisionResult>,
    ) -> bool {
        self.assert_owns(group);

        match result {
            Some(result) => {
                debug_assert!(option.is_valid(), "invalid collision option bundle");
                self.dispatcher.collide_group(group, option, result)
            }
            None => self.collide_scratch(option, |dispatcher, option, result| {
                dispatcher.collide_group(group, option, result)
            }),
        }
    }

    /// Query over all pairs with the first member in `group1` and the second
    /// in `group2`.
    ///
    /// Pairs internal to either group are not considered. The `result`
    /// argument behaves exactly as in [`CollisionDetector::collide`].
    pub fn collide_groups(
        &self,
        group1: &CollisionGroup,
        group2: &CollisionGroup,
        option: &CollisionOption,
        result: Option<&mut CollisionResult>,
    ) -> bool {
        self.assert_owns(group1);
        self.assert_owns(group2);

        match result {
            Some(result) => {
                debug_assert!(option.is_valid(), "invalid collision option bundle");
                self.dispatcher.collide_groups(group1, group2, option, result)
            }
            None => self.collide_scratch(option, |dispatcher, option, result| {
                dispatcher.collide_groups(group1, group2, option, result)
            }),
        }
    }

    fn collide_scratch(
        &self,
        option: &CollisionOption,
        run: impl FnOnce(&dyn CollisionDispatcher, &CollisionOption, &mut CollisionResult) -> bool,
    ) -> bool {
        let mut scratch = self.scratch.lock().expect("scratch query lock poisoned");
        let scratch = scratch.get_or_insert_with(ScratchQuery::new);

        let collided = if option.binary_check {
            debug_assert!(option.is_valid(), "invalid collision option bundle");
            run(&*self.dispatcher, option, &mut scratch.result)
        } else {
            // Force a binary check carrying only the caller's filter: the
            // boolean answer matches the full query's, minus the work of
            // enumerating every contact.
            scratch
                .option
                .collision_filter
                .clone_from(&option.collision_filter);
            run(&*self.dispatcher, &scratch.option, &mut scratch.result)
        };

        // Contacts hold strong object handles; keep nothing alive between
        // convenience calls.
        scratch.result.clear();
        scratch.option.collision_filter = None;

        collided
    }

    fn assert_owns(&self, group: &CollisionGroup) {
        debug_assert!(
            std::ptr::eq(Arc::as_ptr(group.collision_detector()), self),
            "the group was created by another collision detector"
        );
    }
}

static_assertions::assert_impl_all!(CollisionDetector: Send, Sync);
