use crate::bounding_volume::BoundingSphere;
use crate::math::Vector;
use crate::query::details::{self, PairContact};
use crate::query::{
    CollisionDispatcher, CollisionObjectData, CollisionOption, CollisionResult,
};
use crate::world::{CollisionGroup, CollisionObject, ShapeFrameHandle};

/// Backend data of [`BoundingSphereCollisionDispatcher`]: the shape's
/// bounding sphere baked in local-space at object construction time.
pub struct BoundingSphereObjectData {
    /// The object's shape bounding sphere, in the shape's local-space.
    pub local_sphere: BoundingSphere,
}

impl CollisionObjectData for BoundingSphereObjectData {}

/// A narrow-phase backend testing world-space bounding-sphere overlap.
///
/// Exact for balls, conservative for everything else, and numerically
/// distinct from [`AabbCollisionDispatcher`](crate::query::AabbCollisionDispatcher)
/// on purpose: the dispatch layer must tolerate backends that disagree.
///
/// This backend does not override [`CollisionDispatcher::default_object_sharing`],
/// keeping the exclusive policy of the dispatcher contract.
#[derive(Copy, Clone, Debug, Default)]
pub struct BoundingSphereCollisionDispatcher;

impl BoundingSphereCollisionDispatcher {
    /// Creates the dispatcher.
    pub fn new() -> Self {
        BoundingSphereCollisionDispatcher
    }

    fn world_sphere(object: &CollisionObject) -> BoundingSphere {
        let data = object
            .data()
            .downcast_ref::<BoundingSphereObjectData>()
            .expect("the collision object was not created by the bounding-sphere dispatcher");
        data.local_sphere.transform_by(&object.position())
    }

    fn test_pair(object1: &CollisionObject, object2: &CollisionObject) -> Option<PairContact> {
        let sphere1 = Self::world_sphere(object1);
        let sphere2 = Self::world_sphere(object2);

        let delta = sphere2.center - sphere1.center;
        let distance = delta.norm();
        let sum_radius = sphere1.radius + sphere2.radius;

        if distance > sum_radius {
            return None;
        }

        // Concentric spheres have no meaningful separation axis; any axis
        // gives a usable contact normal.
        let normal = if relative_eq!(distance, 0.0) {
            Vector::x()
        } else {
            delta / distance
        };
        let penetration_depth = sum_radius - distance;
        let point = sphere1.center + normal * (sphere1.radius - penetration_depth * 0.5);

        Some(PairContact {
            point,
            normal,
            penetration_depth,
        })
    }
}

impl CollisionDispatcher for BoundingSphereCollisionDispatcher {
    fn create_collision_object_data(&self, frame: &ShapeFrameHandle) -> Box<dyn CollisionObjectData> {
        Box::new(BoundingSphereObjectData {
            local_sphere: frame.shape().compute_local_bounding_sphere(),
        })
    }

    fn collide_group(
        &self,
        group: &CollisionGroup,
        option: &CollisionOption,
        result: &mut CollisionResult,
    ) -> bool {
        details::collide_object_pairs(
            details::group_pairs(group.objects(), None),
            option,
            result,
            |object1, object2| Self::test_pair(object1, object2),
        )
    }

    fn collide_groups(
        &self,
        group1: &CollisionGroup,
        group2: &CollisionGroup,
        option: &CollisionOption,
        result: &mut CollisionResult,
    ) -> bool {
        details::collide_object_pairs(
            details::group_pairs(group1.objects(), Some(group2.objects())),
            option,
            result,
            |object1, object2| Self::test_pair(object1, object2),
        )
    }
}
