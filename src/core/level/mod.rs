pub mod layout;
pub mod loader;
pub mod source;

pub use layout::{LevelFile, SolidStrip};
pub use loader::LevelSpawnPlugin;
