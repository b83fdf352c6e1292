use bevy::prelude::*;
use serde::Deserialize;

/// Level-data record a candle is built from. Every key is optional.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CandleConfig {
    pub x: f32,
    pub y: f32,
    pub name: Option<String>,
    pub burning: Option<bool>,
    pub flicker: Option<bool>,
    /// Light tint as `[r, g, b]`. Extra channels are ignored.
    pub color: Option<Vec<f32>>,
}

impl CandleConfig {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// The configured tint, when at least three channels were given.
    pub fn light_color(&self) -> Option<Color> {
        match self.color.as_deref() {
            Some([r, g, b, ..]) => Some(Color::srgb(*r, *g, *b)),
            _ => None,
        }
    }
}
