use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform random integers.
pub trait RandomSource {
    /// Returns a value in `0..upper`. Returns 0 when `upper` is 0.
    fn rand(&mut self, upper: u32) -> u32;
}

impl RandomSource for StdRng {
    fn rand(&mut self, upper: u32) -> u32 {
        if upper == 0 {
            return 0;
        }
        self.gen_range(0..upper)
    }
}

/// The game-wide random generator, shared by every system that needs dice.
#[derive(Resource)]
pub struct GameRng(StdRng);

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for GameRng {
    fn rand(&mut self, upper: u32) -> u32 {
        self.0.rand(upper)
    }
}
