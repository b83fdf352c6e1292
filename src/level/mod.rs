use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

use crate::candle::CandleConfig;

/// Level shown when no level file is given on the command line.
pub const DEMO_LEVEL: &str = r#"#![enable(implicit_some)]
(
    name: "Candle hall",
    candles: [
        (x: -160.0, y: -16.0, name: "left"),
        (x: -48.0, y: -16.0, name: "blue", color: [0.3, 0.5, 1.0]),
        (x: 48.0, y: -16.0, name: "steady", flicker: false),
        (x: 144.0, y: -16.0, name: "unlit", burning: false),
    ],
)
"#;

#[derive(Error, Debug)]
pub enum LevelError {
    #[error("failed to read level file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse level data: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// The objects placed in a level.
#[derive(Resource, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct LevelData {
    pub name: String,
    pub candles: Vec<CandleConfig>,
}

impl LevelData {
    pub fn from_ron_str(source: &str) -> Result<Self, LevelError> {
        Ok(ron::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, LevelError> {
        let source = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&source)
    }

    pub fn demo() -> Result<Self, LevelError> {
        Self::from_ron_str(DEMO_LEVEL)
    }
}

/// Where the level comes from. `None` selects the demo level.
#[derive(Resource, Debug, Clone, Default)]
pub struct LevelSource {
    pub path: Option<PathBuf>,
}

/// Startup system that reads the level into a `LevelData` resource.
pub fn load_level(mut commands: Commands, source: Option<Res<LevelSource>>) {
    let path = source.and_then(|source| source.path.clone());
    let result = match &path {
        Some(path) => LevelData::load(path),
        None => LevelData::demo(),
    };

    match result {
        Ok(level) => {
            info!("Loaded level '{}' with {} candle(s)", level.name, level.candles.len());
            commands.insert_resource(level);
        }
        Err(err) => error!("{}", err),
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<LevelSource>()
        .add_systems(Startup, load_level);
}
