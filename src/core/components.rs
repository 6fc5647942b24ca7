use bevy::prelude::*;

/// Marker component identifying the player entity (holds physics body,
/// collider and animation state).
#[derive(Component)]
pub struct Player;

/// Marker component for a live collectible sensor. Despawned on first
/// overlap with the player, so a dead collectible can never be re-collected.
#[derive(Component)]
pub struct Collectible;

/// Marker for entities whose lifetime is one play session; everything
/// carrying it is despawned when the Playing state is exited.
#[derive(Component)]
pub struct SessionScoped;

/// Animation selection for the player sprite, recomputed in full every frame
/// (no hysteresis; velocity itself is the only state carried across frames).
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationMode {
    #[default]
    Idle,
    Run,
    Jump,
}
