use bevy::prelude::*;

use crate::render::context::{DrawingContext, RenderTarget};
use crate::sprite::{AnimatedSprite, Blend};

/// One recorded sprite draw, resolved to image, box and target.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawCommand {
    pub image: String,
    pub top_left: Vec2,
    pub size: Vec2,
    pub color: Color,
    /// Requested blend mode. `present_draw_list` draws every command as a
    /// plain alpha-blended `Sprite`, so `Blend::Additive` is kept for
    /// consumers of the list but has no effect on screen.
    pub blend: Blend,
    pub layer: i32,
    pub target: RenderTarget,
}

impl DrawCommand {
    pub fn center(&self) -> Vec2 {
        self.top_left + self.size / 2.0
    }
}

/// Draw calls recorded during the current frame.
///
/// Cleared at the start of every frame, filled by the draw systems and
/// turned into sprites by `present_draw_list`.
#[derive(Resource, Default, Debug)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    target: RenderTarget,
    saved_targets: Vec<RenderTarget>,
}

impl DrawList {
    pub fn clear(&mut self) {
        if !self.saved_targets.is_empty() {
            warn!(
                "Draw list cleared with {} unbalanced render target push(es)",
                self.saved_targets.len()
            );
        }
        self.commands.clear();
        self.saved_targets.clear();
        self.target = RenderTarget::Normal;
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn commands_on(&self, target: RenderTarget) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(move |command| command.target == target)
    }

    /// Currently active target.
    pub fn target(&self) -> RenderTarget {
        self.target
    }

    /// Number of saved targets on the stack.
    pub fn depth(&self) -> usize {
        self.saved_targets.len()
    }
}

impl DrawingContext for DrawList {
    fn draw_sprite(&mut self, sprite: &AnimatedSprite, position: Vec2, layer: i32) {
        self.commands.push(DrawCommand {
            image: sprite.image_path(),
            top_left: sprite.top_left(position),
            size: sprite.size(),
            color: sprite.color(),
            blend: sprite.blend(),
            layer,
            target: self.target,
        });
    }

    fn push_target(&mut self) {
        self.saved_targets.push(self.target);
    }

    fn set_target(&mut self, target: RenderTarget) {
        self.target = target;
    }

    fn pop_target(&mut self) {
        match self.saved_targets.pop() {
            Some(target) => self.target = target,
            None => warn!("pop_target called on an empty render target stack"),
        }
    }
}
