pub mod candle;
pub mod collision;
pub mod editor;
pub mod level;
pub mod movement;
pub mod particles;
pub mod prelude;
pub mod random;
pub mod render;
pub mod scene;
pub mod sprite;

pub use candle::plugin as candle_plugin;
pub use level::plugin as level_plugin;
pub use movement::plugin as movement_plugin;
pub use particles::plugin as particles_plugin;
pub use render::plugin as render_plugin;
pub use scene::plugin as scene_plugin;
