use crate::world::CollisionObject;
use std::sync::Arc;

/// A predicate excluding pairs of collision objects from a query.
///
/// Filters are expected to be pure: the pipeline may evaluate them in any
/// order, skip them for pairs it prunes on its own, and evaluate them again
/// for the same pair on the next query.
pub trait CollisionFilter: Send + Sync {
    /// Returns `true` when the pair `(object1, object2)` must be excluded
    /// from the query.
    fn ignores_collision(&self, object1: &CollisionObject, object2: &CollisionObject) -> bool;
}

impl<F> CollisionFilter for F
where
    F: Fn(&CollisionObject, &CollisionObject) -> bool + Send + Sync,
{
    #[inline]
    fn ignores_collision(&self, object1: &CollisionObject, object2: &CollisionObject) -> bool {
        self(object1, object2)
    }
}

/// A filter combining several filters.
///
/// A pair is excluded as soon as any of the registered filters excludes it.
#[derive(Default)]
pub struct CompositeCollisionFilter {
    filters: Vec<Arc<dyn CollisionFilter>>,
}

impl CompositeCollisionFilter {
    /// Creates a composite filter with no registered filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `filter` in this composite. Registering the same filter
    /// twice has no effect.
    pub fn add_filter(&mut self, filter: Arc<dyn CollisionFilter>) {
        if !self.filters.iter().any(|f| Arc::ptr_eq(f, &filter)) {
            self.filters.push(filter);
        }
    }

    /// Unregisters `filter` from this composite.
    pub fn remove_filter(&mut self, filter: &Arc<dyn CollisionFilter>) {
        self.filters.retain(|f| !Arc::ptr_eq(f, filter));
    }

    /// The number of registered filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// `true` when no filter is registered.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl CollisionFilter for CompositeCollisionFilter {
    fn ignores_collision(&self, object1: &CollisionObject, object2: &CollisionObject) -> bool {
        self.filters
            .iter()
            .any(|filter| filter.ignores_collision(object1, object2))
    }
}
