use bevy::prelude::*;

/// World position in game coordinates (x right, y down).
#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct Position(pub Vec2);

impl Position {
    pub fn new(position: Vec2) -> Self {
        Self(position)
    }

    pub fn value(&self) -> Vec2 {
        self.0
    }
}

/// Velocity in world units per second.
#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct Velocity(pub Vec2);

impl Velocity {
    pub fn new(velocity: Vec2) -> Self {
        Self(velocity)
    }

    pub fn value(&self) -> Vec2 {
        self.0
    }
}

/// Constant change of velocity per second.
#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct Acceleration(pub Vec2);

impl Acceleration {
    pub fn new(acceleration: Vec2) -> Self {
        Self(acceleration)
    }

    pub fn value(&self) -> Vec2 {
        self.0
    }
}
