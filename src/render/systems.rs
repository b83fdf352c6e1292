use bevy::prelude::*;

use crate::render::components::FrameSprite;
use crate::render::context::RenderTarget;
use crate::render::resources::{DrawCommand, DrawList};

/// Depth between two neighbouring layers.
const LAYER_DEPTH: f32 = 0.1;
/// Depth between two draws on the same layer, so later draws land on top.
const ORDER_DEPTH: f32 = 0.0001;
/// Lightmap draws sit above every color layer.
const LIGHTMAP_DEPTH: f32 = 500.0;

/// Converts a recorded draw into a Bevy translation.
/// World coordinates grow downwards, screen coordinates grow upwards.
pub fn screen_translation(command: &DrawCommand, order: usize) -> Vec3 {
    let center = command.center();
    let base = match command.target {
        RenderTarget::Normal => 0.0,
        RenderTarget::Lightmap => LIGHTMAP_DEPTH,
    };
    let z = base + command.layer as f32 * LAYER_DEPTH + order as f32 * ORDER_DEPTH;
    Vec3::new(center.x, -center.y, z)
}

/// System that empties the draw list at the start of a frame.
pub fn clear_draw_list(mut draw_list: ResMut<DrawList>) {
    draw_list.clear();
}

/// System that replaces last frame's sprites with this frame's draw list.
pub fn present_draw_list(
    mut commands: Commands,
    draw_list: Res<DrawList>,
    previous: Query<Entity, With<FrameSprite>>,
    asset_server: Option<Res<AssetServer>>,
) {
    for entity in previous.iter() {
        commands.entity(entity).despawn();
    }

    for (order, command) in draw_list.commands().iter().enumerate() {
        let image = asset_server
            .as_ref()
            .map(|server| server.load(command.image.clone()))
            .unwrap_or_default();

        commands.spawn((
            FrameSprite {
                target: command.target,
            },
            Sprite {
                image,
                color: command.color,
                custom_size: Some(command.size),
                ..default()
            },
            Transform::from_translation(screen_translation(command, order)),
        ));
    }
}
