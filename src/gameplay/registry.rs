use bevy::prelude::*;
use std::collections::HashMap;

/// Closed set of contact classes. Every body carries exactly one.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum CollisionCategory {
    Projectile,
    Target,
    Boundary,
}

impl CollisionCategory {
    /// Category bit as written into level layouts' collision masks.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Projectile => 0b001,
            Self::Target => 0b010,
            Self::Boundary => 0b100,
        }
    }
}

/// Engine default mask: collide with everything.
pub const MASK_ALL: u32 = u32::MAX;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BodyKind {
    Projectile,
    Obstacle,
    Target,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BodyEntry {
    pub kind: BodyKind,
    pub category: CollisionCategory,
    pub collision_mask: u32,
}

/// Bodies taking part in a round: one projectile, any number of obstacles and targets.
///
/// Built once after the scene is spawned. The projectile is required up front so a
/// registry without one cannot exist.
#[derive(Debug, Clone)]
pub struct EntityRegistry {
    projectile: Entity,
    entries: HashMap<Entity, BodyEntry>,
    obstacles: Vec<Entity>,
    targets: Vec<Entity>,
}

impl EntityRegistry {
    pub fn new(projectile: Entity) -> Self {
        Self::with_projectile_mask(projectile, MASK_ALL)
    }

    pub fn with_projectile_mask(projectile: Entity, collision_mask: u32) -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            projectile,
            BodyEntry {
                kind: BodyKind::Projectile,
                category: CollisionCategory::Projectile,
                collision_mask,
            },
        );
        Self {
            projectile,
            entries,
            obstacles: Vec::new(),
            targets: Vec::new(),
        }
    }

    pub fn register_obstacle(&mut self, entity: Entity, category: CollisionCategory, collision_mask: u32) -> bool {
        self.insert(entity, BodyKind::Obstacle, category, collision_mask)
    }

    pub fn register_target(&mut self, entity: Entity, collision_mask: u32) -> bool {
        self.insert(entity, BodyKind::Target, CollisionCategory::Target, collision_mask)
    }

    /// Returns false (and leaves the registry untouched) for an entity already registered.
    fn insert(&mut self, entity: Entity, kind: BodyKind, category: CollisionCategory, collision_mask: u32) -> bool {
        if self.entries.contains_key(&entity) {
            warn!(target: "registry", "entity {entity:?} already registered; ignoring re-registration as {kind:?}");
            return false;
        }
        self.entries.insert(entity, BodyEntry { kind, category, collision_mask });
        match kind {
            BodyKind::Obstacle => self.obstacles.push(entity),
            BodyKind::Target => self.targets.push(entity),
            BodyKind::Projectile => unreachable!("projectile is fixed at construction"),
        }
        true
    }

    pub fn projectile(&self) -> Entity {
        self.projectile
    }

    pub fn is_projectile(&self, entity: Entity) -> bool {
        entity == self.projectile
    }

    pub fn entry(&self, entity: Entity) -> Option<&BodyEntry> {
        self.entries.get(&entity)
    }

    pub fn category_of(&self, entity: Entity) -> Option<CollisionCategory> {
        self.entries.get(&entity).map(|e| e.category)
    }

    pub fn obstacles(&self) -> &[Entity] {
        &self.obstacles
    }

    pub fn targets(&self) -> &[Entity] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_by_kind() {
        let bird = Entity::from_raw(1);
        let mut reg = EntityRegistry::new(bird);
        assert!(reg.register_obstacle(Entity::from_raw(2), CollisionCategory::Boundary, MASK_ALL));
        assert!(reg.register_target(Entity::from_raw(3), CollisionCategory::Projectile.bits()));
        assert_eq!(reg.len(), 3);
        assert_eq!(reg.obstacles(), &[Entity::from_raw(2)]);
        assert_eq!(reg.targets(), &[Entity::from_raw(3)]);
        assert_eq!(reg.category_of(bird), Some(CollisionCategory::Projectile));
        assert_eq!(reg.category_of(Entity::from_raw(3)), Some(CollisionCategory::Target));
        assert_eq!(reg.category_of(Entity::from_raw(9)), None);
        assert!(reg.is_projectile(bird));
    }

    #[test]
    fn rejects_duplicates() {
        let bird = Entity::from_raw(1);
        let mut reg = EntityRegistry::new(bird);
        assert!(!reg.register_obstacle(bird, CollisionCategory::Boundary, MASK_ALL));
        assert!(reg.register_target(Entity::from_raw(4), MASK_ALL));
        assert!(!reg.register_obstacle(Entity::from_raw(4), CollisionCategory::Boundary, MASK_ALL));
        assert_eq!(reg.len(), 2);
        assert!(reg.obstacles().is_empty());
    }
}
