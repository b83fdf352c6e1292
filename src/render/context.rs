use std::ops::{Deref, DerefMut};

use bevy::prelude::*;

use crate::sprite::AnimatedSprite;

/// Surface a draw call lands on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RenderTarget {
    /// The main color buffer.
    #[default]
    Normal,
    /// Light contributions, composited over the color buffer.
    Lightmap,
}

/// Immediate-mode drawing interface handed to game objects each frame.
///
/// Targets form a stack: `push_target` saves the active target,
/// `set_target` replaces it and `pop_target` restores the saved one.
pub trait DrawingContext {
    fn draw_sprite(&mut self, sprite: &AnimatedSprite, position: Vec2, layer: i32);
    fn push_target(&mut self);
    fn set_target(&mut self, target: RenderTarget);
    fn pop_target(&mut self);
}

/// Switches a context to `target` for the lifetime of the scope.
///
/// The previous target is restored on drop, including during unwinding.
pub struct TargetScope<'a, C: DrawingContext + ?Sized> {
    context: &'a mut C,
}

impl<'a, C: DrawingContext + ?Sized> TargetScope<'a, C> {
    pub fn new(context: &'a mut C, target: RenderTarget) -> Self {
        context.push_target();
        context.set_target(target);
        Self { context }
    }
}

impl<C: DrawingContext + ?Sized> Deref for TargetScope<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.context
    }
}

impl<C: DrawingContext + ?Sized> DerefMut for TargetScope<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.context
    }
}

impl<C: DrawingContext + ?Sized> Drop for TargetScope<'_, C> {
    fn drop(&mut self) {
        self.context.pop_target();
    }
}
