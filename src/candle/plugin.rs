use bevy::prelude::*;

use crate::candle::events::{EditCandleProperty, SetCandleBurning};
use crate::candle::systems::*;
use crate::level::load_level;
use crate::random::GameRng;
use crate::scene::SceneSet;

pub fn plugin(app: &mut App) {
    app.add_message::<SetCandleBurning>()
        .add_message::<EditCandleProperty>()
        .init_resource::<GameRng>()
        .add_systems(Startup, spawn_level_candles.after(load_level))
        .add_systems(
            Update,
            (apply_script_commands, apply_editor_edits).in_set(SceneSet::Commands),
        )
        .add_systems(Update, draw_candles.in_set(SceneSet::Draw));
}
