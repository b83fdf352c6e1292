use bevy::prelude::*;

use crate::movement::{Acceleration, Position, Velocity};
use crate::sprite::{AnchorPoint, AnimatedSprite};

/// How long a sprite particle stays in the scene, in seconds.
pub const SPRITE_PARTICLE_LIFETIME: f32 = 0.6;

/// Description of a one-shot sprite particle to insert into the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SpriteParticle {
    pub sprite: AnimatedSprite,
    /// Where the particle's anchor point starts.
    pub position: Vec2,
    pub anchor: AnchorPoint,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub layer: i32,
    pub lifetime: f32,
}

impl SpriteParticle {
    pub fn new(
        sprite: AnimatedSprite,
        position: Vec2,
        anchor: AnchorPoint,
        velocity: Vec2,
        acceleration: Vec2,
        layer: i32,
    ) -> Self {
        Self {
            sprite,
            position,
            anchor,
            velocity,
            acceleration,
            layer,
            lifetime: SPRITE_PARTICLE_LIFETIME,
        }
    }

    pub fn with_lifetime(mut self, seconds: f32) -> Self {
        self.lifetime = seconds;
        self
    }

    /// Top-left corner the particle starts at.
    pub fn top_left(&self) -> Vec2 {
        self.anchor.top_left(self.position, self.sprite.size())
    }

    /// Components of the particle entity.
    pub fn into_bundle(self) -> (ParticleSprite, Position, Velocity, Acceleration) {
        let top_left = self.top_left();
        (
            ParticleSprite::new(self.sprite, self.layer, self.lifetime),
            Position::new(top_left),
            Velocity::new(self.velocity),
            Acceleration::new(self.acceleration),
        )
    }
}

/// A live sprite particle. Despawned when its lifetime runs out.
#[derive(Component, Debug, Clone)]
pub struct ParticleSprite {
    pub sprite: AnimatedSprite,
    pub layer: i32,
    pub lifetime: Timer,
}

impl ParticleSprite {
    pub fn new(sprite: AnimatedSprite, layer: i32, lifetime_secs: f32) -> Self {
        Self {
            sprite,
            layer,
            lifetime: Timer::from_seconds(lifetime_secs, TimerMode::Once),
        }
    }

    pub fn tick(&mut self, delta: std::time::Duration) {
        self.lifetime.tick(delta);
    }

    pub fn is_expired(&self) -> bool {
        self.lifetime.is_finished()
    }
}
