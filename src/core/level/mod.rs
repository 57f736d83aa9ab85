pub mod layout;
pub mod loader;

pub use layout::{LevelLayout, EMBEDDED_LEVEL_RON};
pub use loader::{resolve_layout, spawn_level, ActiveLevel, LevelPlugin, LevelSource};
