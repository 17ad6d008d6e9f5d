use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use riposte3d::math::Isometry;
use riposte3d::query::{
    AabbCollisionDispatcher, BoundingSphereCollisionDispatcher, CollisionDispatcher,
    CollisionObjectData, CollisionOption, CollisionResult, ObjectSharing,
};
use riposte3d::shape::SharedShape;
use riposte3d::world::{
    CollisionDetector, CollisionGroup, CollisionObject, CollisionObjectHandle, ShapeFrameHandle,
    SimpleShapeFrame,
};

fn ball_frame() -> ShapeFrameHandle {
    SimpleShapeFrame::new_handle(SharedShape::ball(1.0), Isometry::identity())
}

#[test]
fn shared_policy_reuses_live_objects() {
    let detector = CollisionDetector::new(AabbCollisionDispatcher::new());
    let frame = ball_frame();

    let first = detector.claim_collision_object(&frame);
    let second = detector.claim_collision_object(&frame);

    assert!(CollisionObjectHandle::ptr_eq(&first, &second));
}

#[test]
fn shared_policy_distinguishes_frames_with_identical_geometry() {
    let detector = CollisionDetector::new(AabbCollisionDispatcher::new());
    let frame1 = ball_frame();
    let frame2 = ball_frame();

    let object1 = detector.claim_collision_object(&frame1);
    let object2 = detector.claim_collision_object(&frame2);

    assert!(!CollisionObjectHandle::ptr_eq(&object1, &object2));
}

#[test]
fn exclusive_policy_always_constructs() {
    let detector = CollisionDetector::new(BoundingSphereCollisionDispatcher::new());
    let frame = ball_frame();

    let first = detector.claim_collision_object(&frame);
    let second = detector.claim_collision_object(&frame);

    assert!(!CollisionObjectHandle::ptr_eq(&first, &second));
}

#[test]
fn released_objects_leave_no_stale_entries() {
    let detector = CollisionDetector::new(AabbCollisionDispatcher::new());
    let frame = ball_frame();

    let first = detector.claim_collision_object(&frame);
    let second = detector.claim_collision_object(&frame);
    drop(first);

    // Still alive through `second`: the same object keeps being handed out.
    let third = detector.claim_collision_object(&frame);
    assert!(CollisionObjectHandle::ptr_eq(&second, &third));

    drop(second);
    drop(third);

    // Every reference is gone: the next claim behaves like a first-ever one,
    // and sharing resumes from the freshly baked object.
    let fresh = detector.claim_collision_object(&frame);
    let fresh_again = detector.claim_collision_object(&frame);
    assert!(CollisionObjectHandle::ptr_eq(&fresh, &fresh_again));
}

#[derive(Default)]
struct BackendEvents {
    created: AtomicUsize,
    notified: AtomicUsize,
    data_dropped: AtomicUsize,
}

struct RecordingData {
    events: Arc<BackendEvents>,
}

impl CollisionObjectData for RecordingData {}

impl Drop for RecordingData {
    fn drop(&mut self) {
        let _ = self.events.data_dropped.fetch_add(1, Ordering::SeqCst);
    }
}

/// A minimal third-party backend: records its lifecycle calls and never
/// reports a collision.
struct RecordingDispatcher {
    events: Arc<BackendEvents>,
    sharing: ObjectSharing,
}

impl CollisionDispatcher for RecordingDispatcher {
    fn create_collision_object_data(
        &self,
        _frame: &ShapeFrameHandle,
    ) -> Box<dyn CollisionObjectData> {
        let _ = self.events.created.fetch_add(1, Ordering::SeqCst);
        Box::new(RecordingData {
            events: self.events.clone(),
        })
    }

    fn default_object_sharing(&self) -> ObjectSharing {
        self.sharing
    }

    fn notify_collision_object_destroying(&self, object: &CollisionObject) {
        // The backend data must still be alive and downcastable when the
        // notification fires.
        assert_eq!(self.events.data_dropped.load(Ordering::SeqCst), 0);
        assert!(object.data().downcast_ref::<RecordingData>().is_some());
        let _ = self.events.notified.fetch_add(1, Ordering::SeqCst);
    }

    fn collide_group(
        &self,
        _group: &CollisionGroup,
        _option: &CollisionOption,
        _result: &mut CollisionResult,
    ) -> bool {
        false
    }

    fn collide_groups(
        &self,
        _group1: &CollisionGroup,
        _group2: &CollisionGroup,
        _option: &CollisionOption,
        _result: &mut CollisionResult,
    ) -> bool {
        false
    }
}

#[test]
fn destruction_notifies_the_backend_before_teardown() {
    let events = Arc::new(BackendEvents::default());
    let detector = CollisionDetector::new(RecordingDispatcher {
        events: events.clone(),
        sharing: ObjectSharing::Shared,
    });
    let frame = ball_frame();

    let object = detector.claim_collision_object(&frame);
    assert_eq!(events.created.load(Ordering::SeqCst), 1);
    assert_eq!(events.notified.load(Ordering::SeqCst), 0);

    drop(object);
    assert_eq!(events.notified.load(Ordering::SeqCst), 1);
    assert_eq!(events.data_dropped.load(Ordering::SeqCst), 1);
}

#[test]
fn custom_backends_choose_their_sharing_policy() {
    for (sharing, expect_same) in [(ObjectSharing::Shared, true), (ObjectSharing::Exclusive, false)]
    {
        let detector = CollisionDetector::new(RecordingDispatcher {
            events: Arc::new(BackendEvents::default()),
            sharing,
        });
        let frame = ball_frame();

        let first = detector.claim_collision_object(&frame);
        let second = detector.claim_collision_object(&frame);
        assert_eq!(CollisionObjectHandle::ptr_eq(&first, &second), expect_same);
    }
}

/// A backend that does not override `default_object_sharing` gets the
/// exclusive policy from the trait contract.
struct BareDispatcher;

impl CollisionDispatcher for BareDispatcher {
    fn create_collision_object_data(
        &self,
        frame: &ShapeFrameHandle,
    ) -> Box<dyn CollisionObjectData> {
        struct Nothing;
        impl CollisionObjectData for Nothing {}
        let _ = frame;
        Box::new(Nothing)
    }

    fn collide_group(
        &self,
        _group: &CollisionGroup,
        _option: &CollisionOption,
        _result: &mut CollisionResult,
    ) -> bool {
        false
    }

    fn collide_groups(
        &self,
        _group1: &CollisionGroup,
        _group2: &CollisionGroup,
        _option: &CollisionOption,
        _result: &mut CollisionResult,
    ) -> bool {
        false
    }
}

#[test]
fn the_dispatcher_contract_defaults_to_the_exclusive_policy() {
    let detector = CollisionDetector::new(BareDispatcher);
    let frame = ball_frame();

    let first = detector.claim_collision_object(&frame);
    let second = detector.claim_collision_object(&frame);
    assert!(!CollisionObjectHandle::ptr_eq(&first, &second));
}

#[test]
fn shared_cache_survives_randomized_claims_and_releases() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let detector = CollisionDetector::new(AabbCollisionDispatcher::new());
    let frames: Vec<_> = (0..8).map(|_| ball_frame()).collect();
    let mut held: Vec<Vec<CollisionObjectHandle>> = vec![Vec::new(); frames.len()];
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..2_000 {
        let i = rng.gen_range(0..frames.len());

        if rng.gen_bool(0.5) {
            held[i].push(detector.claim_collision_object(&frames[i]));
        } else {
            let _ = held[i].pop();
        }

        // While a frame has live handles, they all reference one object.
        if held[i].len() >= 2 {
            let first = &held[i][0];
            let last = &held[i][held[i].len() - 1];
            assert!(CollisionObjectHandle::ptr_eq(first, last));
        }
    }
}
