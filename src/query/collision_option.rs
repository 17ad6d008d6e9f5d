use crate::query::CollisionFilter;
use std::fmt;
use std::sync::Arc;

/// The configuration of a collision query.
///
/// The default bundle runs the most thorough query: contacts enabled, no
/// contact cap, no filter.
#[derive(Clone)]
pub struct CollisionOption {
    /// Whether contact information (point, normal, penetration depth) is
    /// computed for every reported contact.
    pub enable_contact: bool,
    /// Whether the query stops at the very first detected contact.
    ///
    /// A binary check must not request contact information and is capped at
    /// one contact; see [`CollisionOption::is_valid`].
    pub binary_check: bool,
    /// The maximum number of contacts the query may report.
    ///
    /// Zero means unlimited when `binary_check` is `false`.
    pub max_num_contacts: usize,
    /// An optional predicate excluding object pairs from the query.
    pub collision_filter: Option<Arc<dyn CollisionFilter>>,
}

impl CollisionOption {
    /// Creates a collision option bundle from all of its settings.
    pub fn new(
        enable_contact: bool,
        binary_check: bool,
        max_num_contacts: usize,
        collision_filter: Option<Arc<dyn CollisionFilter>>,
    ) -> Self {
        CollisionOption {
            enable_contact,
            binary_check,
            max_num_contacts,
            collision_filter,
        }
    }

    /// The canonical binary-check bundle: no contact information, stop at the
    /// first hit.
    pub fn binary() -> Self {
        CollisionOption {
            enable_contact: false,
            binary_check: true,
            max_num_contacts: 1,
            collision_filter: None,
        }
    }

    /// Replaces the collision filter of this bundle.
    pub fn with_filter(mut self, filter: Arc<dyn CollisionFilter>) -> Self {
        self.collision_filter = Some(filter);
        self
    }

    /// Checks the internal consistency of this bundle.
    ///
    /// Passing an invalid bundle to a query is a programmer error, caught by a
    /// debug assertion rather than reported as a runtime error.
    pub fn is_valid(&self) -> bool {
        !self.binary_check || (!self.enable_contact && self.max_num_contacts == 1)
    }

    /// Does `count` reported contacts saturate the cap of this bundle?
    pub fn reached_max_contacts(&self, count: usize) -> bool {
        self.max_num_contacts != 0 && count >= self.max_num_contacts
    }
}

impl Default for CollisionOption {
    fn default() -> Self {
        CollisionOption {
            enable_contact: true,
            binary_check: false,
            max_num_contacts: 0,
            collision_filter: None,
        }
    }
}

impl fmt::Debug for CollisionOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollisionOption")
            .field("enable_contact", &self.enable_contact)
            .field("binary_check", &self.binary_check)
            .field("max_num_contacts", &self.max_num_contacts)
            .field("collision_filter", &self.collision_filter.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::CollisionOption;

    #[test]
    fn default_runs_the_full_query() {
        let option = CollisionOption::default();
        assert!(option.enable_contact);
        assert!(!option.binary_check);
        assert_eq!(option.max_num_contacts, 0);
        assert!(option.is_valid());
        assert!(!option.reached_max_contacts(1_000_000));
    }

    #[test]
    fn binary_bundle_is_valid_and_capped() {
        let option = CollisionOption::binary();
        assert!(option.is_valid());
        assert!(option.reached_max_contacts(1));
    }

    #[test]
    fn binary_check_with_contacts_is_invalid() {
        let mut option = CollisionOption::binary();
        option.enable_contact = true;
        assert!(!option.is_valid());

        let mut option = CollisionOption::binary();
        option.max_num_contacts = 2;
        assert!(!option.is_valid());
    }
}
