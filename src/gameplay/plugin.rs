use bevy::ecs::query::QuerySingleError;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::{BodyCategory, Hitbox, Obstacle, Projectile, Target};
use crate::core::config::GameConfig;
use crate::core::system::system_order::{HudSet, InputCollectSet, RoundInputSet, RoundTickSet};
use crate::interaction::input::pointer::PointerEvent;
use crate::physics::rapier::body::{ProjectileComponents, RapierProjectile};
use crate::physics::rapier::contacts::contact_from_collision;

use super::body::ProjectileBody;
use super::hit_test::SceneNodes;
use super::registry::{EntityRegistry, MASK_ALL};
use super::session::{GameSession, SessionEvent, SessionSettings};
use super::state::RoundTransition;

/// Wires [`GameSession`] into the frame: pointer dispatch in `Update`, contacts and the
/// rest check after Rapier's writeback in `PostUpdate`.
pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PointerEvent>()
            .add_event::<RoundTransition>()
            .add_event::<CollisionEvent>()
            .configure_sets(Update, (InputCollectSet, RoundInputSet.after(InputCollectSet)))
            .configure_sets(
                PostUpdate,
                (
                    RoundTickSet.after(PhysicsSet::Writeback),
                    HudSet.after(RoundTickSet),
                ),
            )
            .add_systems(PostStartup, attach_session)
            .add_systems(Update, dispatch_pointer_events.in_set(RoundInputSet))
            .add_systems(PostUpdate, advance_session.in_set(RoundTickSet));
    }
}

/// Build the registry from the spawned level and create the session resource.
pub fn attach_session(
    mut commands: Commands,
    cfg: Option<Res<GameConfig>>,
    existing: Option<Res<GameSession>>,
    mut projectile_q: Query<(Entity, Option<&BodyCategory>, ProjectileComponents), With<Projectile>>,
    bodies_q: Query<(Entity, &BodyCategory, Has<Target>), (Without<Projectile>, Or<(With<Obstacle>, With<Target>)>)>,
) {
    if existing.is_some() {
        return;
    }
    let (projectile, tag, components) = match projectile_q.single_mut() {
        Ok(item) => item,
        Err(QuerySingleError::NoEntities(_)) => {
            warn!(target: "round", "no projectile in scene; session not attached");
            return;
        }
        Err(QuerySingleError::MultipleEntities(_)) => {
            error!(target: "round", "more than one projectile in scene; session not attached");
            return;
        }
    };
    let mut registry =
        EntityRegistry::with_projectile_mask(projectile, tag.map(|t| t.collision_mask).unwrap_or(MASK_ALL));
    for (entity, tag, is_target) in bodies_q.iter() {
        if is_target {
            registry.register_target(entity, tag.collision_mask);
        } else {
            registry.register_obstacle(entity, tag.category, tag.collision_mask);
        }
    }
    let settings = cfg.map(|c| SessionSettings::from(&*c)).unwrap_or_default();
    let mut body = RapierProjectile::new(components);
    commands.insert_resource(GameSession::attach(registry, &mut body, settings));
}

/// Feed this frame's pointer events to the session, one at a time, re-placing the
/// projectile's pick area after each so drags hit-test against its latest position.
pub fn dispatch_pointer_events(
    mut pointer_events: EventReader<PointerEvent>,
    session: Option<ResMut<GameSession>>,
    mut projectile_q: Query<(Entity, &Hitbox, ProjectileComponents), With<Projectile>>,
    nodes_q: Query<(Entity, &Transform, &Hitbox), Without<Projectile>>,
    mut transitions: EventWriter<RoundTransition>,
) {
    let Some(mut session) = session else {
        pointer_events.clear();
        return;
    };
    if pointer_events.is_empty() {
        return;
    }
    let Ok((projectile, hitbox, components)) = projectile_q.single_mut() else {
        pointer_events.clear();
        return;
    };
    let hitbox = *hitbox;
    let mut body = RapierProjectile::new(components);

    let mut scene = SceneNodes::default();
    for (entity, tf, hb) in nodes_q.iter() {
        scene.push(entity, tf.translation.truncate(), *hb);
    }
    for ev in pointer_events.read() {
        scene.place(projectile, body.position(), hitbox);
        if let Some(t) = session.handle(&SessionEvent::Pointer(ev.clone()), &mut body, &scene) {
            transitions.write(t);
        }
    }
}

/// Contacts from this step first, then the per-tick rest check.
pub fn advance_session(
    time: Res<Time>,
    mut collisions: EventReader<CollisionEvent>,
    tags: Query<&BodyCategory>,
    session: Option<ResMut<GameSession>>,
    mut projectile_q: Query<ProjectileComponents, With<Projectile>>,
    mut transitions: EventWriter<RoundTransition>,
) {
    let Some(mut session) = session else {
        collisions.clear();
        return;
    };
    let Ok(components) = projectile_q.single_mut() else {
        collisions.clear();
        return;
    };
    let mut body = RapierProjectile::new(components);
    let no_scene = SceneNodes::default();

    for ev in collisions.read() {
        if let Some(contact) = contact_from_collision(ev, &tags) {
            session.handle(&SessionEvent::Contact(contact), &mut body, &no_scene);
        }
    }
    let tick = SessionEvent::FrameTick {
        dt: time.delta_secs(),
    };
    if let Some(t) = session.handle(&tick, &mut body, &no_scene) {
        transitions.write(t);
    }
}
