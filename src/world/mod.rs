//! The collision world: detector façade, object lifecycle and groups.
//!
//! One [`CollisionDetector`] exists per simulation world. It hands out
//! reference-counted [`CollisionObjectHandle`]s for externally-owned shape
//! frames, gathers them into [`CollisionGroup`]s, and routes every query to
//! the narrow-phase backend it was built around.

pub use self::collision_detector::CollisionDetector;
pub use self::collision_group::CollisionGroup;
pub use self::collision_object::{CollisionObject, CollisionObjectHandle};
pub use self::shape_frame::{ShapeFrame, ShapeFrameHandle, ShapeFrameId, SimpleShapeFrame};

mod collision_detector;
mod collision_group;
mod collision_object;
mod object_cache;
mod shape_frame;
