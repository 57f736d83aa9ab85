use bevy::prelude::*;
use slingshot::core::components::Hitbox;
use slingshot::gameplay::body::MemoryBody;
use slingshot::gameplay::hit_test::SceneNodes;

pub const PICK_RADIUS: f32 = 20.0;

/// Scene holding only the projectile, at its current position.
pub fn scene_for(projectile: Entity, body: &MemoryBody) -> SceneNodes {
    let mut s = SceneNodes::default();
    s.push(projectile, body.position, Hitbox::Circle { radius: PICK_RADIUS });
    s
}
