use bevy::prelude::*;

/// High-level app lifecycle state.
/// Boot -> Preload -> Playing, with Playing able to re-enter itself
/// through a Preload hop on restart.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    /// Configure the presentation surface, then hand off.
    #[default]
    Boot,
    /// Declare and await all assets (spritesheets, button, level file).
    Preload,
    /// Active gameplay; owns the whole session.
    Playing,
}
