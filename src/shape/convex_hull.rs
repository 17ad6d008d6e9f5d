use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::math::{Point, Real};
use crate::shape::{Shape, ShapeType};

/// An error raised when a convex hull could not be built from its inputs.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConvexHullBuilderError {
    /// A convex hull needs at least one point.
    #[error("A convex hull needs at least one point.")]
    MissingPoints,
}

/// A convex shape described by the convex hull of a point cloud.
///
/// The points are kept as provided. This layer only guarantees that the
/// bounding volumes reported for the shape enclose all of them; computing the
/// exact hull is a narrow-phase concern that does not live here.
#[derive(PartialEq, Debug, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ConvexHull {
    points: Vec<Point<Real>>,
}

impl ConvexHull {
    /// Attempts to create a convex hull shape from a point cloud.
    pub fn try_new(points: Vec<Point<Real>>) -> Result<Self, ConvexHullBuilderError> {
        if points.is_empty() {
            return Err(ConvexHullBuilderError::MissingPoints);
        }

        Ok(ConvexHull { points })
    }

    /// The points this convex hull was built from.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }
}

impl Shape for ConvexHull {
    fn compute_local_aabb(&self) -> Aabb {
        Aabb::from_points(&self.points)
    }

    fn compute_local_bounding_sphere(&self) -> BoundingSphere {
        let center = self.compute_local_aabb().center();
        let radius = self
            .points
            .iter()
            .map(|point| na::distance(&center, point))
            .fold(0.0, Real::max);

        BoundingSphere::new(center, radius)
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::ConvexHull
    }
}

#[cfg(test)]
mod tests {
    use super::{ConvexHull, ConvexHullBuilderError};
    use crate::math::{Point, Vector};
    use crate::shape::Shape;

    #[test]
    fn rejects_an_empty_point_cloud() {
        assert_eq!(
            ConvexHull::try_new(Vec::new()).err(),
            Some(ConvexHullBuilderError::MissingPoints)
        );
    }

    #[test]
    fn bounding_volumes_enclose_every_point() {
        let points = vec![
            Point::origin(),
            Point::from(Vector::repeat(2.0)),
            Point::from(Vector::x() * -1.0),
        ];
        let hull = ConvexHull::try_new(points.clone()).unwrap();

        let aabb = hull.compute_local_aabb();
        let sphere = hull.compute_local_bounding_sphere();

        for point in &points {
            assert!(aabb.intersects(&crate::bounding_volume::Aabb::new(*point, *point)));
            assert!(na::distance(&sphere.center, point) <= sphere.radius * (1.0 + 1.0e-6));
        }
    }
}
