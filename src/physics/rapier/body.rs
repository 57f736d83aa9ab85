use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::gameplay::body::ProjectileBody;

/// Component set carried by the projectile entity.
pub type ProjectileComponents = (
    &'static mut Transform,
    &'static mut Velocity,
    &'static mut GravityScale,
    &'static mut ExternalImpulse,
);

/// [`ProjectileBody`] over the projectile's Rapier components for the duration of one system run.
pub struct RapierProjectile<'a> {
    pub transform: Mut<'a, Transform>,
    pub velocity: Mut<'a, Velocity>,
    pub gravity: Mut<'a, GravityScale>,
    pub impulse: Mut<'a, ExternalImpulse>,
}

impl<'a> RapierProjectile<'a> {
    pub fn new(
        (transform, velocity, gravity, impulse): (
            Mut<'a, Transform>,
            Mut<'a, Velocity>,
            Mut<'a, GravityScale>,
            Mut<'a, ExternalImpulse>,
        ),
    ) -> Self {
        Self {
            transform,
            velocity,
            gravity,
            impulse,
        }
    }
}

impl ProjectileBody for RapierProjectile<'_> {
    fn position(&self) -> Vec2 {
        self.transform.translation.truncate()
    }

    fn set_position(&mut self, position: Vec2) {
        // keep z for draw order
        self.transform.translation.x = position.x;
        self.transform.translation.y = position.y;
    }

    fn linear_velocity(&self) -> Vec2 {
        self.velocity.linvel
    }

    fn angular_velocity(&self) -> f32 {
        self.velocity.angvel
    }

    fn set_velocity(&mut self, linear: Vec2, angular: f32) {
        self.velocity.linvel = linear;
        self.velocity.angvel = angular;
        if linear == Vec2::ZERO && angular == 0.0 {
            // drop anything queued this frame so a parked body stays parked
            *self.impulse = ExternalImpulse::default();
        }
    }

    fn gravity_enabled(&self) -> bool {
        self.gravity.0 != 0.0
    }

    fn set_gravity_enabled(&mut self, enabled: bool) {
        self.gravity.0 = if enabled { 1.0 } else { 0.0 };
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.impulse.impulse += impulse;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_onto_rapier_components() {
        let mut world = World::new();
        let e = world
            .spawn((
                Transform::from_xyz(1.0, 2.0, 5.0),
                Velocity::linear(Vec2::new(3.0, 4.0)),
                GravityScale(0.0),
                ExternalImpulse::default(),
            ))
            .id();
        {
            let mut q = world.query::<ProjectileComponents>();
            let mut body = RapierProjectile::new(q.get_mut(&mut world, e).unwrap());
            assert_eq!(body.position(), Vec2::new(1.0, 2.0));
            assert_eq!(body.linear_velocity(), Vec2::new(3.0, 4.0));
            assert!(!body.gravity_enabled());
            body.apply_impulse(Vec2::new(-10.0, 0.0));
            body.apply_impulse(Vec2::new(0.0, 2.0));
            body.set_gravity_enabled(true);
            body.set_position(Vec2::new(7.0, 8.0));
        }
        assert_eq!(world.get::<ExternalImpulse>(e).unwrap().impulse, Vec2::new(-10.0, 2.0));
        assert_eq!(world.get::<GravityScale>(e).unwrap().0, 1.0);
        assert_eq!(world.get::<Transform>(e).unwrap().translation, Vec3::new(7.0, 8.0, 5.0));
        {
            let mut q = world.query::<ProjectileComponents>();
            let mut body = RapierProjectile::new(q.get_mut(&mut world, e).unwrap());
            body.set_velocity(Vec2::ZERO, 0.0);
        }
        assert_eq!(world.get::<ExternalImpulse>(e).unwrap().impulse, Vec2::ZERO);
        assert_eq!(world.get::<Velocity>(e).unwrap().linvel, Vec2::ZERO);
    }
}
