use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

use crate::gameplay::collision::ContactRule;
use crate::gameplay::rest::DEFAULT_REST_EPSILON;

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Slingshot".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GravityConfig {
    pub y: f32,
}
impl Default for GravityConfig {
    fn default() -> Self {
        Self { y: -600.0 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub pixels_per_meter: f32,
}
impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            pixels_per_meter: 50.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ProjectileConfig {
    pub mass: f32,
    pub radius: f32,
    pub restitution: f32,
    pub friction: f32,
}
impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            mass: 0.25,
            radius: 20.0,
            restitution: 0.3,
            friction: 0.6,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LaunchConfig {
    /// Multiplier from drag distance to impulse. 1.0 = drag distance is the impulse.
    pub impulse_scale: f32,
}
impl Default for LaunchConfig {
    fn default() -> Self {
        Self { impulse_scale: 1.0 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RestConfig {
    pub epsilon: f32,
    /// false = only bound positive velocities (v <= eps).
    pub symmetric: bool,
}
impl Default for RestConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_REST_EPSILON,
            symmetric: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    pub rule: ContactRule,
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub gravity: GravityConfig,
    pub physics: PhysicsConfig,
    pub projectile: ProjectileConfig,
    pub launch: LaunchConfig,
    pub rest: RestConfig,
    pub scoring: ScoringConfig,
    /// Level layout RON. Empty = embedded default level.
    pub level_path: String,
    pub rapier_debug: bool,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            gravity: Default::default(),
            physics: Default::default(),
            projectile: Default::default(),
            launch: Default::default(),
            rest: Default::default(),
            scoring: Default::default(),
            level_path: "assets/levels/slingshot.ron".into(),
            rapier_debug: false,
        }
    }
}

fn merge_value(base: &mut ron::Value, overlay: ron::Value) {
    use ron::Value;
    match (base, overlay) {
        (Value::Map(bm), Value::Map(om)) => {
            for (k, v) in om.into_iter() {
                let mut incoming = Some(v);
                if let Some((_, ev)) = bm.iter_mut().find(|(ek, _)| **ek == k) {
                    if let Some(v) = incoming.take() {
                        merge_value(ev, v);
                    }
                }
                if let Some(v) = incoming {
                    bm.insert(k, v);
                }
            }
        }
        (b, o) => *b = o,
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load multiple config layers, later files overriding earlier ones (deep merge of maps).
    /// Unreadable files are skipped; returns (config, layer_paths_used, errors).
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        let mut merged: Option<ron::Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();

        for p in paths {
            let path_ref = p.as_ref();
            let txt = match fs::read_to_string(path_ref) {
                Ok(txt) => txt,
                Err(e) => {
                    errors.push(format!("{}: read error: {e}", path_ref.display()));
                    continue;
                }
            };
            match ron::from_str::<ron::Value>(&txt) {
                Ok(val) => {
                    match &mut merged {
                        Some(cur) => merge_value(cur, val),
                        None => merged = Some(val),
                    }
                    used.push(path_ref.display().to_string());
                }
                Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
            }
        }

        let Some(val) = merged else {
            return (GameConfig::default(), used, errors);
        };
        match val.into_rust::<GameConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!("failed to deserialize merged config; using defaults: {e}"));
                (GameConfig::default(), used, errors)
            }
        }
    }

    /// Suspicious but legal values, as human-readable warnings. Logged with `warn!` at startup.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.gravity.y.abs() < 1e-4 {
            w.push("gravity.y magnitude near zero; launched projectile never falls".into());
        }
        if self.gravity.y > 0.0 {
            w.push(format!(
                "gravity.y is positive ({}); Y-up world expects negative for downward",
                self.gravity.y
            ));
        }
        if self.physics.pixels_per_meter <= 0.0 {
            w.push("physics.pixels_per_meter must be > 0".into());
        }
        if self.projectile.mass <= 0.0 {
            w.push(format!("projectile.mass {} must be > 0", self.projectile.mass));
        }
        if self.projectile.radius <= 0.0 {
            w.push(format!("projectile.radius {} must be > 0", self.projectile.radius));
        }
        if !(0.0..=1.5).contains(&self.projectile.restitution) {
            w.push(format!(
                "projectile.restitution {} outside recommended 0..1.5",
                self.projectile.restitution
            ));
        }
        if self.launch.impulse_scale <= 0.0 {
            w.push(format!(
                "launch.impulse_scale {} must be > 0 (launch would fire backwards or not at all)",
                self.launch.impulse_scale
            ));
        } else if (self.launch.impulse_scale - 1.0).abs() > f32::EPSILON {
            w.push(format!(
                "launch.impulse_scale {} rebalances launches (drag distance no longer equals impulse)",
                self.launch.impulse_scale
            ));
        }
        if self.rest.epsilon < 0.0 {
            w.push(format!("rest.epsilon {} negative; projectile never rests", self.rest.epsilon));
        }
        if !self.rest.symmetric {
            w.push("rest.symmetric=false: fast negative velocities count as rest".into());
        }
        if self.scoring.rule == ContactRule::LegacyMask {
            w.push("scoring.rule=LegacyMask only scores projectile hits on bodies masked to the projectile".into());
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate_clean() {
        let cfg = GameConfig::default();
        assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
        assert_eq!(cfg.rest.epsilon, 0.1);
        assert_eq!(cfg.launch.impulse_scale, 1.0);
        assert_eq!(cfg.scoring.rule, ContactRule::Identity);
    }

    #[test]
    fn partial_ron_keeps_other_defaults() {
        let cfg: GameConfig = ron::from_str("(rest: (symmetric: false), scoring: (rule: LegacyMask))").unwrap();
        assert!(!cfg.rest.symmetric);
        assert_eq!(cfg.rest.epsilon, 0.1);
        assert_eq!(cfg.scoring.rule, ContactRule::LegacyMask);
        assert_eq!(cfg.projectile, ProjectileConfig::default());
        assert_eq!(cfg.validate().len(), 2);
    }

    #[test]
    fn flags_bad_values() {
        let mut cfg = GameConfig::default();
        cfg.gravity.y = 10.0;
        cfg.projectile.mass = 0.0;
        cfg.launch.impulse_scale = -1.0;
        let w = cfg.validate().join("\n");
        assert!(w.contains("gravity.y is positive"));
        assert!(w.contains("projectile.mass"));
        assert!(w.contains("launch.impulse_scale"));
    }
}
