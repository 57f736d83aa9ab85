use bevy::prelude::*;
use smallvec::SmallVec;

use crate::gameplay::hit_test::HitTest;
use crate::gameplay::state::RoundState;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum PointerPhase {
    Down,
    Moved,
    Up,
}

/// A batch of simultaneous pointer positions in world space. Mouse input is a batch of one.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub points: SmallVec<[Vec2; 4]>,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, points: impl IntoIterator<Item = Vec2>) -> Self {
        Self {
            phase,
            points: points.into_iter().collect(),
        }
    }

    pub fn down(point: Vec2) -> Self {
        Self::new(PointerPhase::Down, [point])
    }

    pub fn moved(point: Vec2) -> Self {
        Self::new(PointerPhase::Moved, [point])
    }

    pub fn up(point: Vec2) -> Self {
        Self::new(PointerPhase::Up, [point])
    }

    /// The only point that matters; the rest of a multi-touch batch is ignored.
    pub fn primary(&self) -> Option<Vec2> {
        self.points.first().copied()
    }
}

/// What the round should do with a pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerIntent {
    /// Move the projectile to the point and hold it (enter / stay in `Aiming`).
    Grab(Vec2),
    /// Launch from the point.
    Release(Vec2),
    Ignore,
}

/// Maps pointer events onto aim / launch intents for the current round state.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputStateMachine;

impl InputStateMachine {
    pub fn interpret<S: HitTest>(
        &self,
        event: &PointerEvent,
        round: RoundState,
        projectile: Entity,
        scene: &S,
    ) -> PointerIntent {
        if !round.accepts_pointer() {
            return PointerIntent::Ignore;
        }
        let Some(point) = event.primary() else {
            return PointerIntent::Ignore;
        };
        // First candidate resolving to the projectile wins; there is only one projectile.
        let hit = scene.nodes_at(point).into_iter().any(|e| e == projectile);
        if !hit {
            return PointerIntent::Ignore;
        }
        match event.phase {
            PointerPhase::Down | PointerPhase::Moved => PointerIntent::Grab(point),
            PointerPhase::Up if round == RoundState::Aiming => PointerIntent::Release(point),
            PointerPhase::Up => PointerIntent::Ignore,
        }
    }
}
