use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::config::GameConfig;

/// Installs Rapier and applies gravity / debug settings from [`GameConfig`].
pub struct PhysicsSetupPlugin;

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        let cfg = app.world().get_resource::<GameConfig>().cloned().unwrap_or_default();
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(
            cfg.physics.pixels_per_meter,
        ))
        .add_systems(PostStartup, configure_gravity);
        if cfg.rapier_debug {
            app.add_plugins(RapierDebugRenderPlugin::default());
        }
    }
}

fn configure_gravity(mut contexts: Query<&mut RapierConfiguration>, game_cfg: Res<GameConfig>) {
    for mut rapier_cfg in contexts.iter_mut() {
        rapier_cfg.gravity = Vect::new(0.0, game_cfg.gravity.y);
    }
    info!(target: "physics", "gravity set to (0, {})", game_cfg.gravity.y);
}
