//! Shapes usable by the collision pipeline.

pub use self::ball::Ball;
pub use self::capsule::Capsule;
pub use self::convex_hull::{ConvexHull, ConvexHullBuilderError};
pub use self::cuboid::Cuboid;
pub use self::shape::{Shape, ShapeType};
pub use self::shared_shape::SharedShape;

mod ball;
mod capsule;
mod convex_hull;
mod cuboid;
mod shape;
mod shared_shape;
