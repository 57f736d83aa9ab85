use bevy::prelude::*;

use crate::gameplay::session::GameSession;
use crate::gameplay::state::{RoundState, RoundTransition};

#[derive(Resource, Debug, Clone)]
pub struct DebugStats {
    pub frame_counter: u64,
    pub launches: u64,
    pub grabs: u64,
    pub best_score: u32,
    pub time_accum: f32,
    pub log_interval: f32,
}

impl Default for DebugStats {
    fn default() -> Self {
        Self {
            frame_counter: 0,
            launches: 0,
            grabs: 0,
            best_score: 0,
            time_accum: 0.0,
            log_interval: 5.0,
        }
    }
}

pub fn track_transitions_system(
    mut transitions: EventReader<RoundTransition>,
    session: Option<Res<GameSession>>,
    mut stats: ResMut<DebugStats>,
) {
    stats.frame_counter += 1;
    for t in transitions.read() {
        match t.to {
            RoundState::Aiming => stats.grabs += 1,
            RoundState::Flying => stats.launches += 1,
            _ => {}
        }
    }
    if let Some(s) = session {
        stats.best_score = stats.best_score.max(s.score());
    }
}

pub fn debug_logging_system(time: Res<Time>, mut stats: ResMut<DebugStats>, session: Option<Res<GameSession>>) {
    stats.time_accum += time.delta_secs();
    if stats.time_accum < stats.log_interval {
        return;
    }
    stats.time_accum = 0.0;
    let Some(session) = session else {
        info!("SIM frame={} t={:.3}s session=detached", stats.frame_counter, time.elapsed_secs());
        return;
    };
    info!(
        "SIM frame={} t={:.3}s round={:?} score={} best={} rounds={} grabs={} launches={}",
        stats.frame_counter,
        time.elapsed_secs(),
        session.round(),
        session.score(),
        stats.best_score,
        session.rounds_completed(),
        stats.grabs,
        stats.launches
    );
}
