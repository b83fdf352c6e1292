pub mod sets;

pub use sets::*;

use bevy::prelude::*;

use crate::particles::SpriteParticle;

/// Anything new game objects can be inserted into.
pub trait ObjectSink {
    fn add_object(&mut self, particle: SpriteParticle);
}

impl ObjectSink for Vec<SpriteParticle> {
    fn add_object(&mut self, particle: SpriteParticle) {
        self.push(particle);
    }
}

impl ObjectSink for Commands<'_, '_> {
    fn add_object(&mut self, particle: SpriteParticle) {
        debug!(
            "Adding {} particle at {:?}",
            particle.sprite.sheet(),
            particle.position
        );
        self.spawn(particle.into_bundle());
    }
}

pub fn plugin(app: &mut App) {
    app.configure_sets(
        Update,
        (
            SceneSet::FrameStart,
            SceneSet::Commands,
            SceneSet::Simulation,
            SceneSet::Draw,
            SceneSet::Present,
        )
            .chain(),
    );
}
