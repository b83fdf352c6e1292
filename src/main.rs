use std::path::PathBuf;

use bevy::prelude::*;
use candle_scenery::level::LevelSource;
use candle_scenery::random::GameRng;
use candle_scenery::{
    candle_plugin, level_plugin, movement_plugin, particles_plugin, render_plugin, scene_plugin,
};
use clap::Parser;

/// Candle scenery demo
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// RON level file to load instead of the built-in demo level
    #[arg(long)]
    level: Option<PathBuf>,

    /// Seed for the game's random generator
    #[arg(long)]
    seed: Option<u64>,
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn main() {
    let args = Args::parse();
    let rng = match args.seed {
        Some(seed) => GameRng::seeded(seed),
        None => GameRng::from_entropy(),
    };

    App::new()
        .add_plugins(DefaultPlugins)
        .insert_resource(ClearColor(Color::srgb(0.05, 0.04, 0.08)))
        .insert_resource(LevelSource { path: args.level })
        .insert_resource(rng)
        .add_plugins((
            scene_plugin,
            render_plugin,
            movement_plugin,
            particles_plugin,
            level_plugin,
            candle_plugin,
        ))
        .add_systems(Startup, setup_camera)
        .run();
}
