//! Round logic: registry, score, launch, rest detection, collision scoring and the
//! [`session::GameSession`] round manager tying them together. Everything except
//! [`plugin`] is independent of the ECS and the physics engine.

pub mod body;
pub mod collision;
pub mod launch;
pub mod plugin;
pub mod registry;
pub mod rest;
pub mod score;
pub mod session;
pub mod state;

pub use plugin::SessionPlugin;
pub use session::{GameSession, SessionEvent, SessionSettings};
pub use state::{RoundState, RoundTransition};
