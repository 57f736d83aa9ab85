pub mod config;

pub use config::{
    GameConfig, GravityConfig, LaunchConfig, PhysicsConfig, ProjectileConfig, RestConfig, ScoringConfig,
    WindowConfig,
};

use bevy::prelude::*;

/// Outcome of startup config loading, logged once the log plugin is up.
#[derive(Resource, Debug, Clone, Default)]
pub struct ConfigReport {
    pub layers: Vec<String>,
    pub errors: Vec<String>,
}

pub fn log_config_report(report: Option<Res<ConfigReport>>, cfg: Res<GameConfig>) {
    if let Some(report) = report {
        if report.layers.is_empty() {
            info!(target: "config", "no config layers found; using built-in defaults");
        } else {
            info!(target: "config", "config layers: {}", report.layers.join(", "));
        }
        for e in &report.errors {
            warn!(target: "config", "config issue: {e}");
        }
    }
    for w in cfg.validate() {
        warn!(target: "config", "{w}");
    }
}
