//! Collision queries and their dispatch to narrow-phase backends.
//!
//! The heart of this module is the [`CollisionDispatcher`] trait: the contract
//! a narrow-phase backend implements to plug into a
//! [`CollisionDetector`](crate::world::CollisionDetector). Two deliberately
//! simple backends ship with the crate, both built on conservative bounding
//! volumes: [`AabbCollisionDispatcher`] and
//! [`BoundingSphereCollisionDispatcher`]. They are numerically distinct on
//! purpose; swapping one for the other must never require touching the code
//! that issues the queries.

pub use self::aabb_dispatcher::{AabbCollisionDispatcher, AabbObjectData};
pub use self::bounding_sphere_dispatcher::{
    BoundingSphereCollisionDispatcher, BoundingSphereObjectData,
};
pub use self::collision_option::CollisionOption;
pub use self::collision_result::{CollisionResult, Contact};
pub use self::dispatcher::{CollisionDispatcher, CollisionObjectData, ObjectSharing};
pub use self::filter::{CollisionFilter, CompositeCollisionFilter};

mod aabb_dispatcher;
mod bounding_sphere_dispatcher;
mod collision_option;
mod collision_result;
mod dispatcher;
mod filter;
mod pairs;

/// Helpers shared by narrow-phase backend implementations.
pub mod details {
    pub use super::pairs::{collide_object_pairs, cross_pairs, group_pairs, self_pairs, PairContact};
}
