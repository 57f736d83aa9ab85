use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::{BodyCategory, Hitbox, Obstacle, Projectile, Target};
use crate::core::config::GameConfig;
use crate::gameplay::registry::CollisionCategory;

use super::layout::{BodyDef, LevelLayout};

const PROJECTILE_COLOR: Color = Color::srgb(0.85, 0.2, 0.2);
const BOX_COLOR: Color = Color::srgb(0.62, 0.4, 0.22);
const TARGET_COLOR: Color = Color::srgb(0.35, 0.75, 0.3);
const WALL_COLOR: Color = Color::srgb(0.25, 0.25, 0.3);

/// Where the spawned layout came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelSource {
    File(String),
    Embedded,
}

/// Layout in use, kept for inspection after spawn.
#[derive(Resource, Debug, Clone)]
pub struct ActiveLevel {
    pub layout: LevelLayout,
    pub source: LevelSource,
}

/// Spawns the playfield, projectile, boxes and targets from a [`LevelLayout`].
pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_level);
    }
}

/// Configured file first (unless levels are embedded), falling back to the compiled-in level.
pub fn resolve_layout(cfg: &GameConfig) -> (LevelLayout, LevelSource) {
    let path = cfg.level_path.trim();
    if !cfg!(feature = "embedded_levels") && !path.is_empty() {
        match LevelLayout::load_from_file(path) {
            Ok(layout) => return (layout, LevelSource::File(path.to_string())),
            Err(e) => warn!(target: "level", "LevelLoader: {e}; falling back to embedded level"),
        }
    }
    let layout = LevelLayout::embedded().expect("parse embedded level layout failed");
    (layout, LevelSource::Embedded)
}

fn load_level(mut commands: Commands, cfg: Option<Res<GameConfig>>) {
    let cfg = cfg.map(|c| c.clone()).unwrap_or_default();
    let (layout, source) = resolve_layout(&cfg);
    info!(
        target: "level",
        "LevelLoader: '{}' from {:?}: {} boxes, {} targets",
        layout.name,
        source,
        layout.boxes.len(),
        layout.targets.len()
    );
    spawn_level(&mut commands, &layout, &cfg);
    commands.insert_resource(ActiveLevel { layout, source });
}

pub fn spawn_level(commands: &mut Commands, layout: &LevelLayout, cfg: &GameConfig) {
    for wall in layout.edge_walls() {
        commands.spawn((
            Name::new("Boundary"),
            Obstacle,
            BodyCategory::new(CollisionCategory::Boundary),
            Sprite::from_color(WALL_COLOR, wall.half_extents * 2.0),
            Transform::from_translation(wall.center.extend(0.0)),
            RigidBody::Fixed,
            Collider::cuboid(wall.half_extents.x, wall.half_extents.y),
        ));
    }

    for (i, def) in layout.boxes.iter().enumerate() {
        let tag = BodyCategory::new(CollisionCategory::Boundary).with_mask(LevelLayout::box_mask(def));
        spawn_block(commands, format!("box{}", i + 1), def, BOX_COLOR, tag).insert(Obstacle);
    }
    for (i, def) in layout.targets.iter().enumerate() {
        let tag = BodyCategory::new(CollisionCategory::Target).with_mask(LevelLayout::target_mask(def));
        spawn_block(commands, format!("target{}", i + 1), def, TARGET_COLOR, tag).insert(Target);
    }

    let p = &cfg.projectile;
    let anchor = Vec2::from(layout.anchor);
    commands.spawn((
        (
            Name::new("projectile"),
            Projectile,
            BodyCategory::new(CollisionCategory::Projectile),
            Hitbox::Circle { radius: p.radius },
            Sprite::from_color(PROJECTILE_COLOR, Vec2::splat(p.radius * 2.0)),
            Transform::from_translation(anchor.extend(1.0)),
        ),
        (
            RigidBody::Dynamic,
            Collider::ball(p.radius),
            ColliderMassProperties::Mass(p.mass),
            Restitution::coefficient(p.restitution),
            Friction::coefficient(p.friction),
            GravityScale(0.0),
            Velocity::zero(),
            ExternalImpulse::default(),
            ActiveEvents::COLLISION_EVENTS,
            Ccd::enabled(),
        ),
    ));
}

fn spawn_block<'a>(
    commands: &'a mut Commands,
    name: String,
    def: &BodyDef,
    color: Color,
    tag: BodyCategory,
) -> EntityCommands<'a> {
    let half = def.half_extents();
    commands.spawn((
        Name::new(name),
        tag,
        Hitbox::Rect { half_extents: half },
        Sprite::from_color(color, half * 2.0),
        Transform::from_translation(Vec2::from(def.position).extend(0.5)),
        RigidBody::Dynamic,
        Collider::cuboid(half.x, half.y),
        ColliderMassProperties::Mass(def.mass),
    ))
}
