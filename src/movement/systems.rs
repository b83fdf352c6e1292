use bevy::prelude::*;

use crate::movement::components::{Acceleration, Position, Velocity};

/// System that applies acceleration to velocity.
pub fn apply_acceleration(mut query: Query<(&mut Velocity, &Acceleration)>, time: Res<Time>) {
    for (mut velocity, acceleration) in query.iter_mut() {
        velocity.0 += acceleration.value() * time.delta_secs();
    }
}

/// System that applies velocity to position.
/// Any entity with both a Position and Velocity component will be moved.
pub fn apply_velocity(mut query: Query<(&mut Position, &Velocity)>, time: Res<Time>) {
    for (mut position, velocity) in query.iter_mut() {
        position.0 += velocity.value() * time.delta_secs();
    }
}
