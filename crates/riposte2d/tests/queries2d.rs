use approx::assert_relative_eq;
use riposte2d::math::{Isometry, Real, Vector};
use riposte2d::query::{
    AabbCollisionDispatcher, BoundingSphereCollisionDispatcher, CollisionOption, CollisionResult,
};
use riposte2d::shape::SharedShape;
use riposte2d::world::{CollisionDetector, ShapeFrameHandle, SimpleShapeFrame};

fn ball_at(x: Real, y: Real) -> ShapeFrameHandle {
    SimpleShapeFrame::new_handle(SharedShape::ball(1.0), Isometry::translation(x, y))
}

#[test]
fn the_pipeline_works_in_two_dimensions() {
    let detector = CollisionDetector::new(AabbCollisionDispatcher::new());

    let mut group = detector.create_collision_group();
    group.add_shape_frame(&ball_at(0.0, 0.0));
    group.add_shape_frame(&ball_at(1.5, 0.0));
    group.add_shape_frame(&ball_at(10.0, 0.0));

    assert!(detector.collide(&group, &CollisionOption::binary(), None));

    let mut result = CollisionResult::new();
    assert!(detector.collide(&group, &CollisionOption::default(), Some(&mut result)));
    assert_eq!(result.num_contacts(), 1);

    let contact = result.contact(0).unwrap();
    assert_relative_eq!(contact.normal, Vector::x());
    assert_relative_eq!(contact.penetration_depth, 0.5);
}

#[test]
fn backends_disagree_on_diagonal_near_misses_in_2d() {
    let scene = || vec![ball_at(0.0, 0.0), ball_at(1.9, 1.9)];

    let aabb = CollisionDetector::new(AabbCollisionDispatcher::new());
    let mut group = aabb.create_collision_group();
    group.add_shape_frames(&scene());
    assert!(aabb.collide(&group, &CollisionOption::binary(), None));

    let spheres = CollisionDetector::new(BoundingSphereCollisionDispatcher::new());
    let mut group = spheres.create_collision_group();
    group.add_shape_frames(&scene());
    assert!(!spheres.collide(&group, &CollisionOption::binary(), None));
}

#[test]
fn rectangles_collide_through_their_aabbs() {
    let detector = CollisionDetector::new(AabbCollisionDispatcher::new());

    let mut group = detector.create_collision_group();
    group.add_shape_frame(&SimpleShapeFrame::new_handle(
        SharedShape::cuboid(1.0, 1.0),
        Isometry::identity(),
    ));
    group.add_shape_frame(&SimpleShapeFrame::new_handle(
        SharedShape::cuboid(1.0, 1.0),
        Isometry::translation(0.0, 1.5),
    ));

    let mut result = CollisionResult::new();
    assert!(detector.collide(&group, &CollisionOption::default(), Some(&mut result)));

    let contact = result.contact(0).unwrap();
    assert_relative_eq!(contact.normal, Vector::y());
    assert_relative_eq!(contact.penetration_depth, 0.5);
}
