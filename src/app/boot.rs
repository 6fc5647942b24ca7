use bevy::prelude::*;

use super::state::AppState;

/// Daytime sky behind the tile layers.
const SKY_COLOR: Color = Color::srgb(0.53, 0.81, 0.92);

pub struct BootPlugin;

impl Plugin for BootPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Boot), boot);
    }
}

/// One-shot surface setup. Window scaling is declared at app construction;
/// the physics subsystem is registered as a plugin. All that remains here is
/// the clear color and the hand-off to asset preloading.
fn boot(mut commands: Commands, mut next_state: ResMut<NextState<AppState>>) {
    commands.insert_resource(ClearColor(SKY_COLOR));
    info!(target: "boot", "surface configured; advancing to preload");
    next_state.set(AppState::Preload);
}
