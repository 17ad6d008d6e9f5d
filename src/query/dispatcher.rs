use crate::query::{CollisionOption, CollisionResult};
use crate::world::{CollisionGroup, CollisionObject, ShapeFrameHandle};
use downcast_rs::{impl_downcast, DowncastSync};

/// The sharing discipline a detector's object cache enforces.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ObjectSharing {
    /// Every claim bakes a brand new collision object, even for a shape frame
    /// that already has a live one. Required when the backend keeps mutable
    /// per-object scratch state that query execution touches.
    Exclusive,
    /// Claims for one shape frame share a single collision object for as long
    /// as it stays alive. This is what makes it safe to insert one object
    /// into several groups.
    Shared,
}

/// Backend-specific data baked into a collision object.
///
/// A backend downcasts this to the concrete payload type it created in
/// [`CollisionDispatcher::create_collision_object_data`].
pub trait CollisionObjectData: DowncastSync {}
impl_downcast!(sync CollisionObjectData);

/// The contract a narrow-phase backend implements to plug into a
/// [`CollisionDetector`](crate::world::CollisionDetector).
///
/// The detector façade owns the object cache, the groups it hands out and the
/// scratch state of the convenience queries; everything geometric goes
/// through this trait.
pub trait CollisionDispatcher: Send + Sync {
    /// Bakes the backend representation of `frame`'s shape.
    ///
    /// This is the expensive step object caching exists to amortize: the
    /// returned payload typically holds an acceleration structure derived
    /// from the shape's geometry.
    fn create_collision_object_data(&self, frame: &ShapeFrameHandle) -> Box<dyn CollisionObjectData>;

    /// The cache sharing discipline this backend asks for by default.
    fn default_object_sharing(&self) -> ObjectSharing {
        ObjectSharing::Exclusive
    }

    /// Hook invoked right before a collision object's backend data is torn
    /// down, while the object is still fully alive.
    ///
    /// Backends keeping broad-phase bookkeeping keyed on objects purge it
    /// here. The hook must not claim or release collision objects of the
    /// detector that is notifying it.
    fn notify_collision_object_destroying(&self, _object: &CollisionObject) {}

    /// Runs the configured self-collision query over all distinct pairs of
    /// `group`.
    ///
    /// Matching pairs are appended to `result` in the canonical order (each
    /// member against every later-added one, in insertion sequence), honoring
    /// the filter, the contact cap and the binary short-circuit of `option`.
    /// Returns `true` when at least one pair matched.
    fn collide_group(
        &self,
        group: &CollisionGroup,
        option: &CollisionOption,
        result: &mut CollisionResult,
    ) -> bool;

    /// Runs the configured query over all pairs with the first member in
    /// `group1` and the second in `group2`.
    ///
    /// Pairs internal to either group are not considered.
    fn collide_groups(
        &self,
        group1: &CollisionGroup,
        group2: &CollisionGroup,
        option: &CollisionOption,
        result: &mut CollisionResult,
    ) -> bool;
}
