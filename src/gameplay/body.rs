use bevy::prelude::*;

/// The projectile as seen through the physics engine.
///
/// The round logic only reads and writes these properties; integration and contact
/// generation stay inside the engine. The Rapier-backed implementation lives in
/// [`crate::physics::rapier::body`].
pub trait ProjectileBody {
    fn position(&self) -> Vec2;
    /// Teleport, bypassing the solver.
    fn set_position(&mut self, position: Vec2);

    fn linear_velocity(&self) -> Vec2;
    fn angular_velocity(&self) -> f32;
    fn set_velocity(&mut self, linear: Vec2, angular: f32);

    fn gravity_enabled(&self) -> bool;
    fn set_gravity_enabled(&mut self, enabled: bool);

    /// Queue an instantaneous impulse (engine units, unscaled).
    fn apply_impulse(&mut self, impulse: Vec2);
}

/// Body without an engine behind it: velocities are whatever the caller sets and
/// impulses are recorded, not integrated. Drives a [`GameSession`] headless.
///
/// [`GameSession`]: crate::gameplay::session::GameSession
#[derive(Debug, Default, Clone)]
pub struct MemoryBody {
    pub position: Vec2,
    pub linvel: Vec2,
    pub angvel: f32,
    pub gravity: bool,
    pub impulses: Vec<Vec2>,
}

impl MemoryBody {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}

impl ProjectileBody for MemoryBody {
    fn position(&self) -> Vec2 {
        self.position
    }
    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }
    fn linear_velocity(&self) -> Vec2 {
        self.linvel
    }
    fn angular_velocity(&self) -> f32 {
        self.angvel
    }
    fn set_velocity(&mut self, linear: Vec2, angular: f32) {
        self.linvel = linear;
        self.angvel = angular;
    }
    fn gravity_enabled(&self) -> bool {
        self.gravity
    }
    fn set_gravity_enabled(&mut self, enabled: bool) {
        self.gravity = enabled;
    }
    fn apply_impulse(&mut self, impulse: Vec2) {
        self.impulses.push(impulse);
    }
}
