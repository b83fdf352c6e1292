pub mod components;
pub mod config;
pub mod events;
pub mod plugin;
pub mod scripting;
pub mod systems;

// Re-export public API
pub use components::*;
pub use config::*;
pub use events::*;
pub use plugin::*;
pub use scripting::*;
pub use systems::*;
