pub mod components;
pub mod context;
pub mod plugin;
pub mod resources;
pub mod systems;

pub use components::*;
pub use context::*;
pub use plugin::*;
pub use resources::*;
pub use systems::*;
