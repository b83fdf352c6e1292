use bevy::prelude::*;

use crate::movement::systems::{apply_acceleration, apply_velocity};
use crate::scene::SceneSet;

/// Plugin that adds the movement module's systems to the app.
/// Systems run in the SceneSet::Simulation set, acceleration first.
pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        (apply_acceleration, apply_velocity)
            .chain()
            .in_set(SceneSet::Simulation),
    );
}
