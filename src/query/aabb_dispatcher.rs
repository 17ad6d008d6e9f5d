use crate::bounding_volume::Aabb;
use crate::query::details::{self, PairContact};
use crate::query::{
    CollisionDispatcher, CollisionObjectData, CollisionOption, CollisionResult, ObjectSharing,
};
use crate::world::{CollisionGroup, CollisionObject, ShapeFrameHandle};
use crate::math::Vector;

/// Backend data of [`AabbCollisionDispatcher`]: the shape's Aabb baked in
/// local-space at object construction time.
pub struct AabbObjectData {
    /// The object's shape Aabb, in the shape's local-space.
    pub local_aabb: Aabb,
}

impl CollisionObjectData for AabbObjectData {}

/// A conservative narrow-phase backend testing world-space Aabb overlap.
///
/// The baked payload is immutable, so this backend opts into the shared
/// object-cache policy: one collision object per shape frame, reusable across
/// groups.
///
/// Contacts are derived from the intersection box of the two world-space
/// Aabbs: the point is its center, the normal is the axis of smallest overlap
/// oriented from the first object towards the second, and the penetration
/// depth is the overlap along that axis.
#[derive(Copy, Clone, Debug, Default)]
pub struct AabbCollisionDispatcher;

impl AabbCollisionDispatcher {
    /// Creates the dispatcher.
    pub fn new() -> Self {
        AabbCollisionDispatcher
    }

    fn world_aabb(object: &CollisionObject) -> Aabb {
        let data = object
            .data()
            .downcast_ref::<AabbObjectData>()
            .expect("the collision object was not created by the Aabb dispatcher");
        data.local_aabb.transform_by(&object.position())
    }

    fn test_pair(object1: &CollisionObject, object2: &CollisionObject) -> Option<PairContact> {
        let aabb1 = Self::world_aabb(object1);
        let aabb2 = Self::world_aabb(object2);
        let overlap = aabb1.intersection(&aabb2)?;

        let extents = overlap.extents();
        let axis = extents.imin();
        let mut normal = Vector::zeros();
        normal[axis] = if aabb1.center()[axis] <= aabb2.center()[axis] {
            1.0
        } else {
            -1.0
        };

        Some(PairContact {
            point: overlap.center(),
            normal,
            penetration_depth: extents[axis],
        })
    }
}

impl CollisionDispatcher for AabbCollisionDispatcher {
    fn create_collision_object_data(&self, frame: &ShapeFrameHandle) -> Box<dyn CollisionObjectData> {
        Box::new(AabbObjectData {
            local_aabb: frame.shape().compute_local_aabb(),
        })
    }

    fn default_object_sharing(&self) -> ObjectSharing {
        ObjectSharing::Shared
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
