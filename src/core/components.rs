use bevy::prelude::*;

use crate::gameplay::registry::{CollisionCategory, MASK_ALL};

/// Marker for the single launchable body.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Projectile;

/// Marker for passive boxes and scene boundaries.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Obstacle;

/// Marker for scoring objects.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Target;

/// Contact classification carried by every physics body in the level.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyCategory {
    pub category: CollisionCategory,
    pub collision_mask: u32,
}

impl BodyCategory {
    pub fn new(category: CollisionCategory) -> Self {
        Self {
            category,
            collision_mask: MASK_ALL,
        }
    }

    pub fn with_mask(mut self, collision_mask: u32) -> Self {
        self.collision_mask = collision_mask;
        self
    }
}

/// Pick area used for pointer hit-testing. Axis aligned; body rotation is ignored.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub enum Hitbox {
    Circle { radius: f32 },
    Rect { half_extents: Vec2 },
}

impl Hitbox {
    pub fn contains(&self, center: Vec2, point: Vec2) -> bool {
        let d = point - center;
        match *self {
            Hitbox::Circle { radius } => d.length_squared() <= radius * radius,
            Hitbox::Rect { half_extents } => d.x.abs() <= half_extents.x && d.y.abs() <= half_extents.y,
        }
    }
}

/// Tag for the HUD text entity showing the score.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct ScoreText;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_and_rect_containment() {
        let c = Hitbox::Circle { radius: 20.0 };
        assert!(c.contains(Vec2::new(5.0, 5.0), Vec2::new(17.0, 21.0)));
        assert!(!c.contains(Vec2::ZERO, Vec2::new(15.0, 15.0)));
        let r = Hitbox::Rect {
            half_extents: Vec2::new(30.0, 10.0),
        };
        assert!(r.contains(Vec2::ZERO, Vec2::new(-30.0, 10.0)));
        assert!(!r.contains(Vec2::ZERO, Vec2::new(0.0, 10.5)));
    }
}
