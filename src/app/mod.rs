pub mod boot;
pub mod game;
pub mod preload;
pub mod state;
