use riposte3d::math::Isometry;
use riposte3d::query::AabbCollisionDispatcher;
use riposte3d::shape::SharedShape;
use riposte3d::world::{
    CollisionDetector, CollisionObjectHandle, ShapeFrameHandle, ShapeFrameId, SimpleShapeFrame,
};
use std::sync::Arc;

fn ball_frame() -> ShapeFrameHandle {
    SimpleShapeFrame::new_handle(SharedShape::ball(1.0), Isometry::identity())
}

#[test]
fn members_keep_their_insertion_order() {
    let detector = CollisionDetector::new(AabbCollisionDispatcher::new());
    let frames: Vec<_> = (0..4).map(|_| ball_frame()).collect();

    let mut group = detector.create_collision_group();
    group.add_shape_frames(&frames);

    assert_eq!(group.len(), 4);
    for (member, frame) in group.objects().iter().zip(frames.iter()) {
        assert_eq!(member.frame_id(), ShapeFrameId::of(frame));
    }
}

#[test]
fn duplicate_frames_are_added_once() {
    let detector = CollisionDetector::new(AabbCollisionDispatcher::new());
    let frame = ball_frame();

    let mut group = detector.create_collision_group();
    group.add_shape_frame(&frame);
    group.add_shape_frame(&frame);

    assert_eq!(group.len(), 1);
    assert!(group.has_shape_frame(&frame));
}

#[test]
fn duplicate_objects_are_added_once() {
    let detector = CollisionDetector::new(AabbCollisionDispatcher::new());
    let frame = ball_frame();

    let object = detector.claim_collision_object(&frame);
    let mut group = detector.create_collision_group();
    group.add_object(object.clone());
    group.add_object(object.clone());

    assert_eq!(group.len(), 1);
    assert!(group.contains(&object));
}

#[test]
fn removal_by_frame_and_by_object() {
    let detector = CollisionDetector::new(AabbCollisionDispatcher::new());
    let frame1 = ball_frame();
    let frame2 = ball_frame();

    let mut group = detector.create_collision_group();
    group.add_shape_frame(&frame1);
    group.add_shape_frame(&frame2);

    assert!(group.remove_shape_frame(&frame1));
    assert!(!group.remove_shape_frame(&frame1));
    assert_eq!(group.len(), 1);

    let object2 = detector.claim_collision_object(&frame2);
    assert!(group.contains(&object2));
    assert!(group.remove_object(&object2));
    assert!(group.is_empty());

    group.add_shape_frame(&frame1);
    group.add_shape_frame(&frame2);
    group.remove_all();
    assert!(group.is_empty());
}

#[test]
fn groups_remember_their_detector() {
    let detector = CollisionDetector::new(AabbCollisionDispatcher::new());
    let group = detector.create_collision_group();

    assert!(Arc::ptr_eq(group.collision_detector(), &detector));
}

#[test]
fn one_object_may_belong_to_several_groups_under_the_shared_policy() {
    let detector = CollisionDetector::new(AabbCollisionDispatcher::new());
    let frame = ball_frame();

    let mut group1 = detector.create_collision_group();
    let mut group2 = detector.create_collision_group();
    group1.add_shape_frame(&frame);
    group2.add_shape_frame(&frame);

    assert!(CollisionObjectHandle::ptr_eq(
        &group1.objects()[0],
        &group2.objects()[0]
    ));
}

#[test]
fn dropping_a_group_never_destroys_objects_with_other_references() {
    let detector = CollisionDetector::new(AabbCollisionDispatcher::new());
    let frame = ball_frame();

    let kept = detector.claim_collision_object(&frame);

    let mut group = detector.create_collision_group();
    group.add_shape_frame(&frame);
    assert!(CollisionObjectHandle::ptr_eq(&kept, &group.objects()[0]));
    drop(group);

    // `kept` is still fully usable, and the cache still hands the same
    // object out.
    let _ = kept.shape();
    let reclaimed = detector.claim_collision_object(&frame);
    assert!(CollisionObjectHandle::ptr_eq(&kept, &reclaimed));
}
