use bevy::math::Rect;
use bevy::prelude::*;

use crate::collision::CollisionGroup;
use crate::render::DrawingContext;

/// Layer of the background tilemap. Scenery is placed relative to it.
pub const LAYER_BACKGROUNDTILES: i32 = 0;

/// Action every sprite sheet is expected to provide.
pub const DEFAULT_ACTION: &str = "default";

/// How a sprite is composited onto its render target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Blend {
    /// Regular alpha blending (source over destination).
    #[default]
    Alpha,
    /// Source color is added to the destination. Used for glows.
    Additive,
}

/// Which point of a sprite a position refers to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnchorPoint {
    #[default]
    TopLeft,
    Middle,
}

impl AnchorPoint {
    /// Returns the top-left corner of a box of `size` anchored at `anchor`.
    pub fn top_left(self, anchor: Vec2, size: Vec2) -> Vec2 {
        match self {
            AnchorPoint::TopLeft => anchor,
            AnchorPoint::Middle => anchor - size / 2.0,
        }
    }
}

/// An animated sprite: a sheet with named actions plus tint and blend state.
///
/// Actions map to images under the sheet directory, so the sheet
/// `images/objects/candle/candle` with action `on` resolves to
/// `images/objects/candle/candle/on.png`.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimatedSprite {
    sheet: String,
    action: String,
    size: Vec2,
    origin: AnchorPoint,
    color: Color,
    blend: Blend,
}

impl AnimatedSprite {
    pub fn new(sheet: impl Into<String>, size: Vec2) -> Self {
        Self {
            sheet: sheet.into(),
            action: DEFAULT_ACTION.to_string(),
            size,
            origin: AnchorPoint::TopLeft,
            color: Color::WHITE,
            blend: Blend::Alpha,
        }
    }

    /// Sets the hotspot that draw positions refer to.
    pub fn with_origin(mut self, origin: AnchorPoint) -> Self {
        self.origin = origin;
        self
    }

    pub fn sheet(&self) -> &str {
        &self.sheet
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn set_action(&mut self, action: &str) {
        if self.action != action {
            self.action = action.to_string();
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn origin(&self) -> AnchorPoint {
        self.origin
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn blend(&self) -> Blend {
        self.blend
    }

    pub fn set_blend(&mut self, blend: Blend) {
        self.blend = blend;
    }

    /// Image backing the current action.
    pub fn image_path(&self) -> String {
        format!("{}/{}.png", self.sheet, self.action)
    }

    /// Top-left corner of the sprite when drawn at `position`.
    pub fn top_left(&self, position: Vec2) -> Vec2 {
        self.origin.top_left(position, self.size)
    }

    pub fn draw<C>(&self, context: &mut C, position: Vec2, layer: i32)
    where
        C: DrawingContext + ?Sized,
    {
        context.draw_sprite(self, position, layer);
    }
}

/// A sprite with a position, a bounding box and a layer.
///
/// Game objects embed this rather than inheriting from it, and forward
/// position and layer queries to it.
#[derive(Clone, Debug, PartialEq)]
pub struct MovingSprite {
    position: Vec2,
    layer: i32,
    group: CollisionGroup,
    sprite: AnimatedSprite,
}

impl MovingSprite {
    pub fn new(position: Vec2, layer: i32, group: CollisionGroup, sprite: AnimatedSprite) -> Self {
        Self {
            position,
            layer,
            group,
            sprite,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn layer(&self) -> i32 {
        self.layer
    }

    pub fn collision_group(&self) -> CollisionGroup {
        self.group
    }

    /// Bounding box in world coordinates (y grows downwards).
    pub fn bbox(&self) -> Rect {
        Rect::from_corners(self.position, self.position + self.sprite.size())
    }

    pub fn sprite(&self) -> &AnimatedSprite {
        &self.sprite
    }

    pub fn sprite_mut(&mut self) -> &mut AnimatedSprite {
        &mut self.sprite
    }

    pub fn draw<C>(&self, context: &mut C)
    where
        C: DrawingContext + ?Sized,
    {
        self.sprite.draw(context, self.position, self.layer);
    }
}
