use bevy::prelude::*;

/// Phase of the current round.
/// Idle -> Aiming -> Flying -> (Resting) -> Idle
///
/// Owned by [`GameSession`](crate::gameplay::session::GameSession); nothing else writes it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum RoundState {
    /// Projectile parked on its anchor with gravity off, waiting for a grab.
    #[default]
    Idle,
    /// A pointer holds the projectile; its position follows the pointer.
    Aiming,
    /// Launched; the physics engine drives the projectile.
    Flying,
    /// Entered and left inside the tick that detected rest. Never observed between ticks.
    Resting,
}

impl RoundState {
    /// Grab / drag events are only honoured before launch.
    pub fn accepts_pointer(self) -> bool {
        matches!(self, Self::Idle | Self::Aiming)
    }

    /// Gravity on the projectile is armed exactly while flying.
    pub fn gravity_enabled(self) -> bool {
        self == Self::Flying
    }
}

/// Emitted whenever the observable round state changes.
#[derive(Event, Debug, Clone, Copy, Eq, PartialEq)]
pub struct RoundTransition {
    pub from: RoundState,
    pub to: RoundState,
}

impl RoundTransition {
    /// A flight that ended in a reset (passed through `Resting`).
    pub fn is_round_end(&self) -> bool {
        self.from == RoundState::Flying && self.to == RoundState::Idle
    }
}
