// This file is part of Slingshot.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::core::config::log_config_report;
#[cfg(feature = "debug")]
use crate::debug::DebugPlugin;
use crate::core::level::LevelPlugin;
use crate::gameplay::SessionPlugin;
use crate::interaction::input::InputInteractionPlugin;
use crate::physics::rapier::PhysicsSetupPlugin;
use crate::rendering::{CameraPlugin, ScoreHudPlugin};

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, log_config_report).add_plugins((
            CameraPlugin,
            PhysicsSetupPlugin,
            LevelPlugin,
            SessionPlugin,
            InputInteractionPlugin,
            ScoreHudPlugin,
            #[cfg(feature = "debug")]
            DebugPlugin,
        ));
    }
}
