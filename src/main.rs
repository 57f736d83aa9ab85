use std::path::PathBuf;

use anyhow::bail;
use bevy::prelude::*;
use clap::Parser;

use slingshot::core::config::{ConfigReport, GameConfig};
use slingshot::GamePlugin;

const BASE_CONFIG: &str = "assets/config/game.ron";
const LOCAL_CONFIG: &str = "assets/config/game.local.ron";

#[derive(Parser, Debug)]
#[command(name = "slingshot", about = "Drag the projectile back, release, knock the targets over")]
struct Cli {
    /// Extra RON config layers applied after the base and local files.
    #[arg(long = "config", value_name = "PATH")]
    configs: Vec<PathBuf>,
    /// Level layout to load instead of `level_path` from the config.
    #[arg(long, value_name = "PATH")]
    level: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut layers = vec![PathBuf::from(BASE_CONFIG)];
    if PathBuf::from(LOCAL_CONFIG).exists() {
        layers.push(PathBuf::from(LOCAL_CONFIG));
    }
    layers.extend(cli.configs.iter().cloned());

    let (mut cfg, used, errors) = GameConfig::load_layered(&layers);
    if let Some(level) = &cli.level {
        cfg.level_path = level.display().to_string();
    }

    let exit = App::new()
        .insert_resource(cfg.clone())
        .insert_resource(ConfigReport { layers: used, errors })
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(GamePlugin)
        .run();

    if let AppExit::Error(code) = exit {
        bail!("app exited with code {code}");
    }
    Ok(())
}
