use crate::math::{Point, Real, Vector};
use crate::query::{CollisionOption, CollisionResult, Contact};
use crate::world::CollisionObjectHandle;
use either::Either;

/// The geometric part of a contact a backend computed for one object pair.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PairContact {
    /// The contact point, in world-space.
    pub point: Point<Real>,
    /// The contact normal, pointing from the first object towards the second.
    pub normal: Vector<Real>,
    /// The penetration depth along `normal`.
    pub penetration_depth: Real,
}

/// Enumerates all distinct unordered pairs of `objects` in canonical order:
/// each object is paired against every later-added one, in insertion
/// sequence.
pub fn self_pairs<'a>(
    objects: &'a [CollisionObjectHandle],
) -> impl Iterator<Item = (&'a CollisionObjectHandle, &'a CollisionObjectHandle)> {
    objects.iter().enumerate().flat_map(move |(i, first)| {
        objects[i + 1..].iter().map(move |second| (first, second))
    })
}

/// Enumerates all pairs with the first member taken from `objects1` and the
/// second from `objects2`, in insertion sequence.
pub fn cross_pairs<'a>(
    objects1: &'a [CollisionObjectHandle],
    objects2: &'a [CollisionObjectHandle],
) -> impl Iterator<Item = (&'a CollisionObjectHandle, &'a CollisionObjectHandle)> {
    objects1
        .iter()
        .flat_map(move |first| objects2.iter().map(move |second| (first, second)))
}

/// The pairs of a self-collision query (`objects2` is `None`) or of a
/// group-group query (`objects2` is `Some`), in canonical order.
pub fn group_pairs<'a>(
    objects1: &'a [CollisionObjectHandle],
    objects2: Option<&'a [CollisionObjectHandle]>,
) -> impl Iterator<Item = (&'a CollisionObjectHandle, &'a CollisionObjectHandle)> {
    match objects2 {
        None => Either::Left(self_pairs(objects1)),
        Some(objects2) => Either::Right(cross_pairs(objects1, objects2)),
    }
}

/// Drives a pairwise narrow-phase test over `pairs`.
///
/// `test` returns the contact geometry of a colliding pair, or `None` when
/// the pair does not collide. Matches are appended to `result` in enumeration
/// order, honoring the filter, the contact cap and the binary short-circuit
/// of `option`. Returns `true` when at least one pair matched.
pub fn collide_object_pairs<'a>(
    pairs: impl Iterator<Item = (&'a CollisionObjectHandle, &'a CollisionObjectHandle)>,
    option: &CollisionOption,
    result: &mut CollisionResult,
    mut test: impl FnMut(&CollisionObjectHandle, &CollisionObjectHandle) -> Option<PairContact>,
) -> bool {
    debug_assert!(
        option.is_valid(),
        "a binary check must not request contact information and is capped at one contact"
    );

    let mut collided = false;
    let mut num_matches = 0;

    for (object1, object2) in pairs {
        if let Some(filter) = &option.collision_filter {
            if filter.ignores_collision(object1, object2) {
                continue;
            }
        }

        let geometry = match test(object1, object2) {
            Some(geometry) => geometry,
            None => continue,
        };

        collided = true;

        let contact = if option.enable_contact {
            Contact::new(
                object1.clone(),
                object2.clone(),
                geometry.point,
                geometry.normal,
                geometry.penetration_depth,
            )
        } else {
            Contact::pair(object1.clone(), object2.clone())
        };
        result.add_contact(contact);
        num_matches += 1;

        if option.binary_check || option.reached_max_contacts(num_matches) {
            break;
        }
    }

    collided
}
