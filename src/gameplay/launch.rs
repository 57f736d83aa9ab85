use bevy::prelude::*;

use super::body::ProjectileBody;

/// Turns a release point into the slingshot impulse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchController {
    /// 1.0 keeps drag distance == impulse magnitude.
    impulse_scale: f32,
}

impl Default for LaunchController {
    fn default() -> Self {
        Self { impulse_scale: 1.0 }
    }
}

impl LaunchController {
    pub fn new(impulse_scale: f32) -> Self {
        Self { impulse_scale }
    }

    /// Impulse points from the release point back through the anchor (reverse of the drag).
    pub fn impulse_for(&self, anchor: Vec2, release: Vec2) -> Vec2 {
        (anchor - release) * self.impulse_scale
    }

    /// Apply the launch impulse and arm gravity. Returns the impulse that was applied.
    pub fn launch<B: ProjectileBody>(&self, body: &mut B, anchor: Vec2, release: Vec2) -> Vec2 {
        let impulse = self.impulse_for(anchor, release);
        body.apply_impulse(impulse);
        body.set_gravity_enabled(true);
        impulse
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::body::MemoryBody;

    #[test]
    fn impulse_is_reverse_drag_unscaled() {
        let lc = LaunchController::default();
        assert_eq!(lc.impulse_for(Vec2::ZERO, Vec2::new(10.0, 0.0)), Vec2::new(-10.0, 0.0));
        assert_eq!(
            lc.impulse_for(Vec2::new(-420.0, -150.0), Vec2::new(-512.5, -201.25)),
            Vec2::new(92.5, 51.25)
        );
    }

    #[test]
    fn launch_arms_gravity_and_pushes_once() {
        let mut body = MemoryBody::at(Vec2::new(3.0, 4.0));
        let j = LaunchController::default().launch(&mut body, Vec2::ZERO, Vec2::new(3.0, 4.0));
        assert_eq!(j, Vec2::new(-3.0, -4.0));
        assert!(body.gravity);
        assert_eq!(body.impulses, vec![Vec2::new(-3.0, -4.0)]);
    }

    #[test]
    fn rebalanced_scale_multiplies() {
        let lc = LaunchController::new(2.5);
        assert_eq!(lc.impulse_for(Vec2::ZERO, Vec2::new(4.0, -2.0)), Vec2::new(-10.0, 5.0));
    }
}
