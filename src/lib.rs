pub mod app;
pub mod core;
pub mod gameplay;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use app::game::GamePlugin;
pub use app::state::AppState;
pub use core::components::{AnimationMode, Collectible, Player, SessionScoped};
pub use core::config::config::GameConfig;
pub use gameplay::score::Score;
