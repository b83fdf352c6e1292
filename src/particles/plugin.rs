use bevy::prelude::*;

use crate::particles::systems::{age_particles, draw_particles};
use crate::scene::SceneSet;

pub fn plugin(app: &mut App) {
    app.add_systems(Update, age_particles.in_set(SceneSet::Simulation))
        .add_systems(Update, draw_particles.in_set(SceneSet::Draw));
}
