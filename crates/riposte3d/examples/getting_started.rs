use riposte3d::math::Isometry;
use riposte3d::query::{AabbCollisionDispatcher, CollisionOption, CollisionResult};
use riposte3d::shape::SharedShape;
use riposte3d::world::{CollisionDetector, SimpleShapeFrame};

fn main() {
    // One detector per simulation world; the backend is swappable.
    let detector = CollisionDetector::new(AabbCollisionDispatcher::new());

    // Shape frames are owned by the caller (in an engine: the body model).
    let ball = SimpleShapeFrame::new_handle(SharedShape::ball(0.5), Isometry::identity());
    let cuboid = SimpleShapeFrame::new_handle(
        SharedShape::cuboid(0.5, 0.5, 0.5),
        Isometry::translation(0.25, 0.0, 0.0),
    );

    let mut group = detector.create_collision_group();
    group.add_shape_frame(&ball);
    group.add_shape_frame(&cuboid);

    // Cheap boolean check first...
    if detector.collide(&group, &CollisionOption::binary(), None) {
        // ...full contact enumeration only when something touched.
        let mut result = CollisionResult::new();
        let _ = detector.collide(&group, &CollisionOption::default(), Some(&mut result));

        for contact in result.contacts() {
            println!(
                "contact at {:?} along {:?}, depth {}",
                contact.point, contact.normal, contact.penetration_depth
            );
        }
    }
}
