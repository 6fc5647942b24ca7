use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::components::Player;
use crate::core::system::system_order::PostPhysicsAdjustSet;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera).add_systems(
            Update,
            follow_player
                .in_set(PostPhysicsAdjustSet)
                .run_if(in_state(AppState::Playing)),
        );
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Side-scroller camera: track the player after the physics step so the view
/// never lags a frame behind the body.
fn follow_player(
    q_player: Query<&Transform, With<Player>>,
    mut q_camera: Query<&mut Transform, (With<Camera2d>, Without<Player>)>,
) {
    let Ok(player_tf) = q_player.single() else {
        return;
    };
    let Ok(mut cam_tf) = q_camera.single_mut() else {
        return;
    };
    cam_tf.translation.x = player_tf.translation.x;
    cam_tf.translation.y = player_tf.translation.y;
}
