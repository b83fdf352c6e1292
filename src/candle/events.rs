use bevy::prelude::*;

use crate::editor::PropertyValue;

/// Script request to light or put out every candle with the given name.
#[derive(Message, Debug, Clone)]
pub struct SetCandleBurning {
    pub name: String,
    pub burning: bool,
}

/// Editor request to change one property of a candle.
#[derive(Message, Debug, Clone)]
pub struct EditCandleProperty {
    pub entity: Entity,
    pub key: String,
    pub value: PropertyValue,
}
