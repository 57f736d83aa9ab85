//! Debug module: periodic round statistics in the log.
//! Built only when compiled with `--features debug` (default).

#[cfg(feature = "debug")]
mod logging;

#[cfg(feature = "debug")]
pub use logging::{debug_logging_system, track_transitions_system, DebugStats};

#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
pub struct DebugPlugin;

#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use crate::core::system::system_order::HudSet;

        app.init_resource::<DebugStats>()
            .add_systems(PostUpdate, (track_transitions_system, debug_logging_system).chain().after(HudSet));
    }
}
