use bevy::prelude::*;

/// How the collision resolver should treat a pair of colliding objects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitResponse {
    /// Both objects keep moving.
    Continue,
    /// The moving object is stopped at the contact point.
    AbortMove,
    /// The other object is displaced; this one behaves like terrain.
    ForceMove,
}

/// Collision group an object takes part in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CollisionGroup {
    /// Never collides. Used for pure scenery.
    #[default]
    Disabled,
    Static,
    MovingStatic,
    Moving,
    Touchable,
}

/// Sides touched during a collision.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CollisionHit {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
    pub crush: bool,
    pub slope_normal: Vec2,
}
