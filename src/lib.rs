pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use crate::app::game::GamePlugin;
pub use crate::core::components::{BodyCategory, Hitbox, Obstacle, Projectile, ScoreText, Target};
pub use crate::core::config::{config::GameConfig, config::WindowConfig, ConfigReport};
pub use crate::gameplay::{GameSession, RoundState, RoundTransition, SessionEvent, SessionPlugin, SessionSettings};
pub use crate::interaction::input::{PointerEvent, PointerPhase};
