use bevy::prelude::*;

/// System sets for the per-frame order of the scene.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SceneSet {
    /// Per-frame resets (draw list).
    FrameStart,
    /// Script and editor commands addressed to scene objects.
    Commands,
    /// Movement, particle aging.
    Simulation,
    /// Objects record their draw calls.
    Draw,
    /// Draw list is turned into sprites.
    Present,
}
