use bevy::prelude::*;

use crate::candle::components::Candle;
use crate::candle::events::{EditCandleProperty, SetCandleBurning};
use crate::candle::scripting::{CandleApi, ScriptedCandle};
use crate::level::LevelData;
use crate::random::GameRng;
use crate::render::DrawList;

/// Startup system that spawns a candle for every placement in the level.
pub fn spawn_level_candles(mut commands: Commands, level: Option<Res<LevelData>>) {
    let Some(level) = level else {
        warn!("No level loaded, no candles spawned");
        return;
    };

    for config in &level.candles {
        commands.spawn(Candle::new(config));
    }
    info!("Spawned {} candle(s)", level.candles.len());
}

/// System that runs script requests against the candles they name.
pub fn apply_script_commands(
    mut commands: Commands,
    mut requests: MessageReader<SetCandleBurning>,
    mut candles: Query<&mut Candle>,
) {
    for request in requests.read() {
        // Unnamed candles are not exposed to scripts.
        if request.name.is_empty() {
            warn!("Script addressed a candle without a name");
            continue;
        }

        let mut matched = false;
        for mut candle in candles.iter_mut() {
            if candle.name() != request.name {
                continue;
            }
            matched = true;
            ScriptedCandle::new(&mut candle, &mut commands).set_burning(request.burning);
        }

        if !matched {
            warn!("Script addressed unknown candle '{}'", request.name);
        }
    }
}

/// System that applies inspector edits and re-syncs the edited candles.
pub fn apply_editor_edits(
    mut edits: MessageReader<EditCandleProperty>,
    mut candles: Query<&mut Candle>,
) {
    for edit in edits.read() {
        let Ok(mut candle) = candles.get_mut(edit.entity) else {
            warn!("Editor edit for {:?}, which is not a candle", edit.entity);
            continue;
        };

        if candle.set_property(&edit.key, edit.value.clone()) {
            candle.after_editor_set();
        } else {
            warn!("Candle has no property '{}' of kind {:?}", edit.key, edit.value.kind());
        }
    }
}

/// System that records every candle's draw calls for this frame.
pub fn draw_candles(
    candles: Query<&Candle>,
    mut draw_list: ResMut<DrawList>,
    mut rng: ResMut<GameRng>,
) {
    for candle in candles.iter() {
        candle.draw(&mut *draw_list, &mut *rng);
    }
}
