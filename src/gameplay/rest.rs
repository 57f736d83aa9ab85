use bevy::prelude::*;

use super::body::ProjectileBody;

pub const DEFAULT_REST_EPSILON: f32 = 0.1;

/// Decides when a flying projectile has settled, and parks it back on the anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestDetector {
    epsilon: f32,
    /// `true`: |v| <= eps on every axis. `false`: v <= eps (large negative speeds count as rest).
    symmetric: bool,
}

impl Default for RestDetector {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_REST_EPSILON,
            symmetric: true,
        }
    }
}

impl RestDetector {
    pub fn new(epsilon: f32, symmetric: bool) -> Self {
        Self { epsilon, symmetric }
    }

    fn within(&self, v: f32) -> bool {
        if self.symmetric {
            v.abs() <= self.epsilon
        } else {
            v <= self.epsilon
        }
    }

    pub fn is_at_rest(&self, linvel: Vec2, angvel: f32) -> bool {
        self.within(linvel.x) && self.within(linvel.y) && self.within(angvel)
    }

    /// Freeze the projectile on its anchor with gravity disarmed.
    pub fn settle<B: ProjectileBody>(&self, body: &mut B, anchor: Vec2) {
        body.set_gravity_enabled(false);
        body.set_velocity(Vec2::ZERO, 0.0);
        body.set_position(anchor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::body::MemoryBody;

    #[test]
    fn slow_body_rests() {
        let r = RestDetector::default();
        assert!(r.is_at_rest(Vec2::new(0.05, 0.05), 0.05));
        assert!(r.is_at_rest(Vec2::new(0.1, -0.1), 0.1));
        assert!(!r.is_at_rest(Vec2::new(0.11, 0.0), 0.0));
        assert!(!r.is_at_rest(Vec2::ZERO, 0.5));
    }

    #[test]
    fn one_sided_threshold_accepts_fast_negative_motion() {
        let strict = RestDetector::new(0.1, true);
        let legacy = RestDetector::new(0.1, false);
        let falling = Vec2::new(-300.0, -450.0);
        assert!(!strict.is_at_rest(falling, -2.0));
        assert!(legacy.is_at_rest(falling, -2.0));
        assert!(!legacy.is_at_rest(Vec2::new(0.2, -5.0), 0.0));
    }

    #[test]
    fn settle_parks_on_anchor() {
        let mut body = MemoryBody {
            position: Vec2::new(250.0, -80.0),
            linvel: Vec2::new(0.02, 0.01),
            angvel: 0.03,
            gravity: true,
            impulses: vec![],
        };
        RestDetector::default().settle(&mut body, Vec2::new(-420.0, -150.0));
        assert_eq!(body.position, Vec2::new(-420.0, -150.0));
        assert_eq!(body.linvel, Vec2::ZERO);
        assert_eq!(body.angvel, 0.0);
        assert!(!body.gravity);
    }
}
