use crate::math::{Point, Real, Vector};
use crate::world::{CollisionObjectHandle, ShapeFrameHandle, ShapeFrameId};

/// A single detected contact between two collision objects.
///
/// The geometric fields are only meaningful when the query that produced the
/// contact had `enable_contact` set; they are zeroed otherwise.
#[derive(Clone, Debug)]
pub struct Contact {
    /// The first object involved in the contact.
    pub object1: CollisionObjectHandle,
    /// The second object involved in the contact.
    pub object2: CollisionObjectHandle,
    /// The contact point, in world-space.
    pub point: Point<Real>,
    /// The contact normal, pointing from the first object towards the second.
    pub normal: Vector<Real>,
    /// The penetration depth along `normal`.
    pub penetration_depth: Real,
}

impl Contact {
    /// Creates a contact carrying full geometric information.
    pub fn new(
        object1: CollisionObjectHandle,
        object2: CollisionObjectHandle,
        point: Point<Real>,
        normal: Vector<Real>,
        penetration_depth: Real,
    ) -> Self {
        Contact {
            object1,
            object2,
            point,
            normal,
            penetration_depth,
        }
    }

    /// Creates a contact carrying only the identities of the colliding pair.
    pub fn pair(object1: CollisionObjectHandle, object2: CollisionObjectHandle) -> Self {
        Contact {
            object1,
            object2,
            point: Point::origin(),
            normal: Vector::zeros(),
            penetration_depth: 0.0,
        }
    }
}

/// The accumulated outcome of a collision query.
///
/// Results are plain accumulators: queries append to them and never clear
/// them, so one result can collect the records of several queries. Clearing
/// between calls is the caller's decision.
#[derive(Default, Debug)]
pub struct CollisionResult {
    contacts: Vec<Contact>,
}

impl CollisionResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a contact record.
    pub fn add_contact(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// `true` when at least one contact has been recorded.
    pub fn is_collision(&self) -> bool {
        !self.contacts.is_empty()
    }

    /// The number of recorded contacts.
    pub fn num_contacts(&self) -> usize {
        self.contacts.len()
    }

    /// The `i`-th recorded contact.
    pub fn contact(&self, i: usize) -> Option<&Contact> {
        self.contacts.get(i)
    }

    /// Every recorded contact, in recording order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// The distinct shape frames involved in at least one recorded contact.
    pub fn colliding_shape_frames(&self) -> Vec<ShapeFrameHandle> {
        let mut seen: Vec<ShapeFrameId> = Vec::new();
        let mut frames = Vec::new();

        for contact in &self.contacts {
            for object in [&contact.object1, &contact.object2] {
                let id = object.frame_id();
                if !seen.contains(&id) {
                    seen.push(id);
                    frames.push(object.shape_frame().clone());
                }
            }
        }

        frames
    }

    /// Removes every recorded contact, keeping the allocated storage.
    pub fn clear(&mut self) {
        self.contacts.clear();
    }
}
