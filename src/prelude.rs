pub use bevy::prelude::*;

// Re-export scene object types
pub use crate::candle::{Candle, CandleApi, CandleConfig, EditCandleProperty, ScriptedCandle, SetCandleBurning};
pub use crate::collision::{CollisionGroup, CollisionHit, HitResponse};
pub use crate::editor::{ObjectOption, ObjectSettings, OptionKind, PropertyValue};
pub use crate::level::{LevelData, LevelError, LevelSource};
pub use crate::particles::{ParticleSprite, SpriteParticle};
pub use crate::random::{GameRng, RandomSource};
pub use crate::render::{DrawList, DrawingContext, RenderTarget, TargetScope};
pub use crate::scene::{ObjectSink, SceneSet};
pub use crate::sprite::{AnchorPoint, AnimatedSprite, Blend, MovingSprite};
