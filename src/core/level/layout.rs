use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

use crate::gameplay::registry::{CollisionCategory, MASK_ALL};

/// Compiled-in copy of the default level, used when no layout file can be read.
pub const EMBEDDED_LEVEL_RON: &str = include_str!("../../../assets/levels/slingshot.ron");

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct Vec2Def {
    pub x: f32,
    pub y: f32,
}
impl From<Vec2Def> for Vec2 {
    fn from(v: Vec2Def) -> Self {
        Vec2::new(v.x, v.y)
    }
}

fn default_body_mass() -> f32 {
    0.4
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BodyDef {
    pub position: Vec2Def,
    /// Full width / height.
    pub size: Vec2Def,
    #[serde(default = "default_body_mass")]
    pub mass: f32,
    #[serde(default)]
    pub collision_mask: Option<u32>,
}

impl BodyDef {
    pub fn half_extents(&self) -> Vec2 {
        Vec2::from(self.size) * 0.5
    }
}

fn default_wall_thickness() -> f32 {
    20.0
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LevelLayout {
    pub version: u32,
    #[serde(default)]
    pub name: String,
    /// Half extents of the playfield; an edge loop of walls is placed on it.
    pub bounds: Vec2Def,
    #[serde(default = "default_wall_thickness")]
    pub wall_thickness: f32,
    /// Projectile rest position.
    pub anchor: Vec2Def,
    #[serde(default)]
    pub boxes: Vec<BodyDef>,
    #[serde(default)]
    pub targets: Vec<BodyDef>,
}

/// Fixed wall piece of the playfield edge loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallPiece {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl LevelLayout {
    pub fn from_ron(txt: &str) -> Result<Self, String> {
        let lf: LevelLayout = ron::from_str(txt).map_err(|e| format!("parse layout: {e}"))?;
        if lf.version != 1 {
            return Err(format!("LevelLayout version {} unsupported (expected 1)", lf.version));
        }
        Ok(lf)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let txt = fs::read_to_string(&path).map_err(|e| format!("read layout {:?}: {e}", path.as_ref()))?;
        Self::from_ron(&txt).map_err(|e| format!("{:?}: {e}", path.as_ref()))
    }

    pub fn embedded() -> Result<Self, String> {
        Self::from_ron(EMBEDDED_LEVEL_RON)
    }

    /// Boxes default to colliding with everything; targets default to the projectile
    /// category bits, which is what mask-based scoring keys on.
    pub fn box_mask(def: &BodyDef) -> u32 {
        def.collision_mask.unwrap_or(MASK_ALL)
    }

    pub fn target_mask(def: &BodyDef) -> u32 {
        def.collision_mask.unwrap_or(CollisionCategory::Projectile.bits())
    }

    /// Bottom, top, left, right.
    pub fn edge_walls(&self) -> [WallPiece; 4] {
        let half = Vec2::from(self.bounds);
        let t = self.wall_thickness * 0.5;
        [
            WallPiece {
                center: Vec2::new(0.0, -half.y),
                half_extents: Vec2::new(half.x, t),
            },
            WallPiece {
                center: Vec2::new(0.0, half.y),
                half_extents: Vec2::new(half.x, t),
            },
            WallPiece {
                center: Vec2::new(-half.x, 0.0),
                half_extents: Vec2::new(t, half.y),
            },
            WallPiece {
                center: Vec2::new(half.x, 0.0),
                half_extents: Vec2::new(t, half.y),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_level_matches_source_scene() {
        let lf = LevelLayout::embedded().expect("embedded level parses");
        assert_eq!(lf.boxes.len(), 5);
        assert_eq!(lf.targets.len(), 3);
        assert!(lf.boxes.iter().chain(lf.targets.iter()).all(|b| b.mass == 0.4));
        assert_eq!(Vec2::from(lf.anchor), Vec2::new(-420.0, -150.0));
        assert_eq!(LevelLayout::target_mask(&lf.targets[0]), CollisionCategory::Projectile.bits());
        assert_eq!(LevelLayout::box_mask(&lf.boxes[0]), MASK_ALL);
    }

    #[test]
    fn rejects_unknown_version() {
        let err = LevelLayout::from_ron("(version: 3, bounds: (x: 1.0, y: 1.0), anchor: (x: 0.0, y: 0.0))")
            .unwrap_err();
        assert!(err.contains("version 3"), "{err}");
    }

    #[test]
    fn edge_loop_encloses_bounds() {
        let lf = LevelLayout::from_ron("(version: 1, bounds: (x: 100.0, y: 50.0), wall_thickness: 10.0, anchor: (x: 0.0, y: 0.0))")
            .unwrap();
        let [bottom, top, left, right] = lf.edge_walls();
        assert_eq!(bottom.center, Vec2::new(0.0, -50.0));
        assert_eq!(top.half_extents, Vec2::new(100.0, 5.0));
        assert_eq!(left.center, Vec2::new(-100.0, 0.0));
        assert_eq!(right.half_extents, Vec2::new(5.0, 50.0));
    }
}
