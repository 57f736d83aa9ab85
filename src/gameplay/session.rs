use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::interaction::input::pointer::{InputStateMachine, PointerEvent, PointerIntent};

use super::body::ProjectileBody;
use super::collision::{CollisionResolver, ContactEvent, ContactRule};
use super::hit_test::HitTest;
use super::launch::LaunchController;
use super::registry::EntityRegistry;
use super::rest::RestDetector;
use super::score::ScoreTracker;
use super::state::{RoundState, RoundTransition};

/// Everything the round manager reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Pointer(PointerEvent),
    Contact(ContactEvent),
    FrameTick { dt: f32 },
}

/// Tunables picked out of [`GameConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSettings {
    pub impulse_scale: f32,
    pub rest_epsilon: f32,
    pub rest_symmetric: bool,
    pub contact_rule: ContactRule,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::from(&GameConfig::default())
    }
}

impl From<&GameConfig> for SessionSettings {
    fn from(cfg: &GameConfig) -> Self {
        Self {
            impulse_scale: cfg.launch.impulse_scale,
            rest_epsilon: cfg.rest.epsilon,
            rest_symmetric: cfg.rest.symmetric,
            contact_rule: cfg.scoring.rule,
        }
    }
}

/// Round manager: owns the registry, round state and score, and is the only writer of
/// projectile kinematics outside the physics step.
#[derive(Resource, Debug)]
pub struct GameSession {
    registry: EntityRegistry,
    round: RoundState,
    score: ScoreTracker,
    anchor: Vec2,
    input: InputStateMachine,
    launcher: LaunchController,
    rest: RestDetector,
    resolver: CollisionResolver,
    rounds_completed: u64,
    last_impulse: Option<Vec2>,
}

impl GameSession {
    /// Capture the anchor from the projectile's current position and park it there.
    pub fn attach<B: ProjectileBody>(registry: EntityRegistry, body: &mut B, settings: SessionSettings) -> Self {
        let anchor = body.position();
        body.set_gravity_enabled(false);
        info!(
            target: "round",
            "session attached: projectile={:?} anchor=({:.1}, {:.1}) bodies={} rule={:?}",
            registry.projectile(),
            anchor.x,
            anchor.y,
            registry.len(),
            settings.contact_rule
        );
        Self {
            registry,
            round: RoundState::Idle,
            score: ScoreTracker::default(),
            anchor,
            input: InputStateMachine,
            launcher: LaunchController::new(settings.impulse_scale),
            rest: RestDetector::new(settings.rest_epsilon, settings.rest_symmetric),
            resolver: CollisionResolver::new(settings.contact_rule),
            rounds_completed: 0,
            last_impulse: None,
        }
    }

    pub fn round(&self) -> RoundState {
        self.round
    }

    pub fn score(&self) -> u32 {
        self.score.value()
    }

    pub fn score_text(&self) -> String {
        self.score.current_text()
    }

    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn rounds_completed(&self) -> u64 {
        self.rounds_completed
    }

    /// Impulse of the most recent launch.
    pub fn last_impulse(&self) -> Option<Vec2> {
        self.last_impulse
    }

    /// Single synchronous entry point. Returns the observable transition, if any.
    pub fn handle<B: ProjectileBody, S: HitTest>(
        &mut self,
        event: &SessionEvent,
        body: &mut B,
        scene: &S,
    ) -> Option<RoundTransition> {
        match event {
            SessionEvent::Pointer(ev) => self.on_pointer(ev, body, scene),
            SessionEvent::Contact(c) => {
                self.on_contact(c);
                None
            }
            SessionEvent::FrameTick { .. } => self.on_tick(body),
        }
    }

    fn on_pointer<B: ProjectileBody, S: HitTest>(
        &mut self,
        event: &PointerEvent,
        body: &mut B,
        scene: &S,
    ) -> Option<RoundTransition> {
        match self.input.interpret(event, self.round, self.registry.projectile(), scene) {
            PointerIntent::Ignore => None,
            PointerIntent::Grab(point) => {
                body.set_position(point);
                (self.round != RoundState::Aiming).then(|| self.enter(RoundState::Aiming))
            }
            PointerIntent::Release(point) => {
                let impulse = self.launcher.launch(body, self.anchor, point);
                self.last_impulse = Some(impulse);
                info!(
                    target: "round",
                    "launch from ({:.1}, {:.1}) impulse=({:.1}, {:.1})",
                    point.x,
                    point.y,
                    impulse.x,
                    impulse.y
                );
                Some(self.enter(RoundState::Flying))
            }
        }
    }

    fn on_contact(&mut self, contact: &ContactEvent) {
        if !self.resolver.is_scoring(contact, &self.registry) {
            return;
        }
        self.score.increment();
        debug!(
            target: "score",
            "contact {:?} <-> {:?} scored; score={}",
            contact.a.entity,
            contact.b.entity,
            self.score.value()
        );
    }

    fn on_tick<B: ProjectileBody>(&mut self, body: &mut B) -> Option<RoundTransition> {
        if self.round != RoundState::Flying {
            return None;
        }
        if !self.rest.is_at_rest(body.linear_velocity(), body.angular_velocity()) {
            return None;
        }
        self.round = RoundState::Resting;
        self.rest.settle(body, self.anchor);
        let final_score = self.score.value();
        self.score.reset();
        self.rounds_completed += 1;
        self.round = RoundState::Idle;
        info!(
            target: "round",
            "projectile at rest; round {} ended with score {}",
            self.rounds_completed,
            final_score
        );
        Some(RoundTransition {
            from: RoundState::Flying,
            to: RoundState::Idle,
        })
    }

    fn enter(&mut self, to: RoundState) -> RoundTransition {
        let from = self.round;
        self.round = to;
        debug!(target: "round", "{from:?} -> {to:?}");
        RoundTransition { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::components::Hitbox;
    use crate::gameplay::body::MemoryBody;
    use crate::gameplay::collision::ContactBody;
    use crate::gameplay::hit_test::SceneNodes;
    use crate::gameplay::registry::{CollisionCategory, MASK_ALL};

    const BIRD: Entity = Entity::from_raw(1);
    const BOX: Entity = Entity::from_raw(2);

    fn setup(anchor: Vec2) -> (GameSession, MemoryBody) {
        let mut reg = EntityRegistry::new(BIRD);
        reg.register_obstacle(BOX, CollisionCategory::Boundary, MASK_ALL);
        let mut body = MemoryBody::at(anchor);
        body.gravity = true;
        let session = GameSession::attach(reg, &mut body, SessionSettings::default());
        (session, body)
    }

    fn scene(body: &MemoryBody) -> SceneNodes {
        let mut s = SceneNodes::default();
        s.push(BIRD, body.position, Hitbox::Circle { radius: 15.0 });
        s
    }

    fn pointer(session: &mut GameSession, body: &mut MemoryBody, ev: PointerEvent) -> Option<RoundTransition> {
        let s = scene(body);
        session.handle(&SessionEvent::Pointer(ev), body, &s)
    }

    fn tick(session: &mut GameSession, body: &mut MemoryBody) -> Option<RoundTransition> {
        session.handle(&SessionEvent::FrameTick { dt: 1.0 / 60.0 }, body, &SceneNodes::default())
    }

    #[test]
    fn attach_parks_with_gravity_off() {
        let (session, body) = setup(Vec2::new(-420.0, -150.0));
        assert_eq!(session.round(), RoundState::Idle);
        assert_eq!(session.anchor(), Vec2::new(-420.0, -150.0));
        assert!(!body.gravity);
    }

    #[test]
    fn drag_then_release_launches() {
        let (mut session, mut body) = setup(Vec2::ZERO);
        let t = pointer(&mut session, &mut body, PointerEvent::down(Vec2::new(5.0, 0.0)));
        assert_eq!(
            t,
            Some(RoundTransition {
                from: RoundState::Idle,
                to: RoundState::Aiming
            })
        );
        assert_eq!(body.position, Vec2::new(5.0, 0.0));
        assert_eq!(pointer(&mut session, &mut body, PointerEvent::moved(Vec2::new(10.0, 0.0))), None);
        assert_eq!(session.round(), RoundState::Aiming);
        assert!(!body.gravity);

        pointer(&mut session, &mut body, PointerEvent::up(Vec2::new(10.0, 0.0)));
        assert_eq!(session.round(), RoundState::Flying);
        assert_eq!(body.impulses, vec![Vec2::new(-10.0, 0.0)]);
        assert_eq!(session.last_impulse(), Some(Vec2::new(-10.0, 0.0)));
        assert!(body.gravity);
    }

    #[test]
    fn tick_outside_flight_is_inert() {
        let (mut session, mut body) = setup(Vec2::ZERO);
        assert_eq!(tick(&mut session, &mut body), None);
        pointer(&mut session, &mut body, PointerEvent::down(Vec2::ZERO));
        assert_eq!(tick(&mut session, &mut body), None);
        assert_eq!(session.round(), RoundState::Aiming);
    }

    #[test]
    fn rest_resets_round() {
        let (mut session, mut body) = setup(Vec2::ZERO);
        pointer(&mut session, &mut body, PointerEvent::down(Vec2::ZERO));
        pointer(&mut session, &mut body, PointerEvent::up(Vec2::new(-30.0, -10.0)));
        body.position = Vec2::new(400.0, -200.0);
        body.linvel = Vec2::new(250.0, 10.0);
        assert_eq!(tick(&mut session, &mut body), None);

        let hit = ContactEvent::new(ContactBody::untagged(BIRD), ContactBody::untagged(BOX));
        session.handle(&SessionEvent::Contact(hit), &mut body, &SceneNodes::default());
        assert_eq!(session.score(), 1);

        body.linvel = Vec2::new(0.05, 0.05);
        body.angvel = 0.05;
        let t = tick(&mut session, &mut body).expect("rest transition");
        assert!(t.is_round_end());
        assert_eq!(session.round(), RoundState::Idle);
        assert_eq!(session.score(), 0);
        assert_eq!(session.score_text(), "0");
        assert_eq!(body.position, Vec2::ZERO);
        assert_eq!(body.linvel, Vec2::ZERO);
        assert!(!body.gravity);
        assert_eq!(session.rounds_completed(), 1);
    }

    #[test]
    fn non_scoring_contact_leaves_score() {
        let (mut session, mut body) = setup(Vec2::ZERO);
        let other = ContactEvent::new(ContactBody::untagged(BOX), ContactBody::untagged(Entity::from_raw(9)));
        session.handle(&SessionEvent::Contact(other), &mut body, &SceneNodes::default());
        assert_eq!(session.score(), 0);
    }
}
