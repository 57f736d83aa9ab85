use bevy::prelude::*;
use serde::Deserialize;

use super::registry::{CollisionCategory, EntityRegistry, MASK_ALL};

/// How a contact is judged to involve the projectile.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Deserialize)]
pub enum ContactRule {
    /// Either participant is the registered projectile entity.
    #[default]
    Identity,
    /// Either participant reports the `Projectile` category.
    Category,
    /// The projectile is one participant and either participant's collision mask equals
    /// the `Projectile` category bits. Only the projectile reports contacts, so with the
    /// default layout this scores projectile <-> target hits.
    LegacyMask,
}

/// One side of a contact as reported by the engine.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ContactBody {
    pub entity: Entity,
    pub category: Option<CollisionCategory>,
    pub collision_mask: u32,
}

impl ContactBody {
    /// Body the engine knows nothing else about.
    pub fn untagged(entity: Entity) -> Self {
        Self {
            entity,
            category: None,
            collision_mask: MASK_ALL,
        }
    }

    pub fn tagged(entity: Entity, category: CollisionCategory, collision_mask: u32) -> Self {
        Self {
            entity,
            category: Some(category),
            collision_mask,
        }
    }
}

/// Two bodies began touching.
#[derive(Event, Debug, Clone, Copy, Eq, PartialEq)]
pub struct ContactEvent {
    pub a: ContactBody,
    pub b: ContactBody,
}

impl ContactEvent {
    pub fn new(a: ContactBody, b: ContactBody) -> Self {
        Self { a, b }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionResolver {
    rule: ContactRule,
}

impl CollisionResolver {
    pub fn new(rule: ContactRule) -> Self {
        Self { rule }
    }

    /// Each scoring contact is worth one point; no debounce.
    pub fn is_scoring(&self, contact: &ContactEvent, registry: &EntityRegistry) -> bool {
        let sides = [contact.a, contact.b];
        match self.rule {
            ContactRule::Identity => sides.iter().any(|s| registry.is_projectile(s.entity)),
            ContactRule::Category => sides
                .iter()
                .any(|s| s.category == Some(CollisionCategory::Projectile)),
            ContactRule::LegacyMask => {
                sides.iter().any(|s| registry.is_projectile(s.entity))
                    && sides
                        .iter()
                        .any(|s| s.collision_mask == CollisionCategory::Projectile.bits())
            }
        }
    }
}
