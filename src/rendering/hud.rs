use bevy::prelude::*;

use crate::core::components::ScoreText;
use crate::core::config::GameConfig;
use crate::core::system::system_order::HudSet;
use crate::gameplay::session::GameSession;

/// Score label, a quarter of the window height above centre.
pub struct ScoreHudPlugin;

impl Plugin for ScoreHudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_score_text)
            .add_systems(PostUpdate, refresh_score_text.in_set(HudSet));
    }
}

fn spawn_score_text(mut commands: Commands, cfg: Option<Res<GameConfig>>) {
    let height = cfg.map(|c| c.window.height).unwrap_or(720.0);
    commands.spawn((
        ScoreText,
        Text2d::new("0"),
        TextFont {
            font_size: 60.0,
            ..default()
        },
        Transform::from_xyz(0.0, height / 4.0, 2.0),
    ));
}

pub fn refresh_score_text(session: Option<Res<GameSession>>, mut q: Query<&mut Text2d, With<ScoreText>>) {
    let Some(session) = session else {
        return;
    };
    let text = session.score_text();
    for mut t in q.iter_mut() {
        if t.0 != text {
            t.0 = text.clone();
        }
    }
}
