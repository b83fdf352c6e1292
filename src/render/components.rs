use bevy::prelude::*;

use crate::render::context::RenderTarget;

/// Sprite spawned from the draw list. Lives for exactly one frame.
#[derive(Component, Debug)]
pub struct FrameSprite {
    pub target: RenderTarget,
}
