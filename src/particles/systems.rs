use bevy::prelude::*;

use crate::movement::Position;
use crate::particles::components::ParticleSprite;
use crate::render::DrawList;

/// System that ages particles and despawns the ones past their lifetime.
pub fn age_particles(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut ParticleSprite)>,
) {
    for (entity, mut particle) in query.iter_mut() {
        particle.tick(time.delta());

        if particle.is_expired() {
            commands.entity(entity).despawn();
        }
    }
}

/// System that records a draw call for every live particle.
pub fn draw_particles(
    query: Query<(&ParticleSprite, &Position)>,
    mut draw_list: ResMut<DrawList>,
) {
    for (particle, position) in query.iter() {
        particle.sprite.draw(&mut *draw_list, position.value(), particle.layer);
    }
}
