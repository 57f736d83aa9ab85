//! System ordering labels for one frame.
//! 1. InputCollect (mouse / touch -> PointerEvent)
//! 2. RoundInput (PointerEvent -> GameSession)
//! 3. Rapier step (PostUpdate, handled by plugin)
//! 4. RoundTick (contacts + rest check, after Rapier writeback)
//! 5. Hud (score text refresh)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputCollectSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct RoundInputSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct RoundTickSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct HudSet;
