use bevy::prelude::*;

use crate::core::components::SessionScoped;
use crate::core::level::loader::LevelSpawnPlugin;
use crate::core::system::system_order::{PostPhysicsAdjustSet, PrePhysicsSet};
use crate::gameplay::animation::AnimationPlugin;
use crate::gameplay::collect::CollectPlugin;
use crate::gameplay::player::PlayerPlugin;
use crate::gameplay::restart::RestartPlugin;
use crate::gameplay::score::ScorePlugin;
use crate::physics::rapier::PhysicsSetupPlugin;
use crate::rendering::camera::CameraPlugin;

use super::boot::BootPlugin;
use super::preload::PreloadPlugin;
use super::state::AppState;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .configure_sets(
                Update,
                (PrePhysicsSet, PostPhysicsAdjustSet.after(PrePhysicsSet)),
            )
            .add_plugins((
                BootPlugin,
                PreloadPlugin,
                CameraPlugin,
                PhysicsSetupPlugin,
                LevelSpawnPlugin,
                PlayerPlugin,
                AnimationPlugin,
                CollectPlugin,
                ScorePlugin,
                RestartPlugin,
            ))
            .add_systems(OnExit(AppState::Playing), teardown_session);
    }
}

/// Despawn every entity belonging to the current play session. Runs on any
/// exit from Playing, so a restart hop rebuilds the world from scratch.
pub fn teardown_session(mut commands: Commands, q_session: Query<Entity, With<SessionScoped>>) {
    let mut count = 0usize;
    for e in &q_session {
        commands.entity(e).despawn();
        count += 1;
    }
    info!(target: "session", "session torn down ({count} entities)");
}
