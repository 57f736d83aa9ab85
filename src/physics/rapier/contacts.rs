use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::BodyCategory;
use crate::gameplay::collision::{ContactBody, ContactEvent};

fn contact_body(entity: Entity, tags: &Query<&BodyCategory>) -> ContactBody {
    match tags.get(entity) {
        Ok(tag) => ContactBody::tagged(entity, tag.category, tag.collision_mask),
        Err(_) => ContactBody::untagged(entity),
    }
}

/// Contact-begin events only; `Stopped` is not part of the round logic.
pub fn contact_from_collision(ev: &CollisionEvent, tags: &Query<&BodyCategory>) -> Option<ContactEvent> {
    match ev {
        CollisionEvent::Started(a, b, _flags) => Some(ContactEvent::new(contact_body(*a, tags), contact_body(*b, tags))),
        CollisionEvent::Stopped(..) => None,
    }
}
