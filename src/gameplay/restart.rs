use bevy::prelude::*;

use crate::app::preload::GameAssets;
use crate::app::state::AppState;
use crate::core::components::SessionScoped;

/// Marker for the restart control below the score overlay.
#[derive(Component)]
pub struct RestartButton;

pub struct RestartPlugin;

impl Plugin for RestartPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Playing), spawn_restart_button)
            .add_systems(
                Update,
                handle_restart_button.run_if(in_state(AppState::Playing)),
            );
    }
}

fn spawn_restart_button(mut commands: Commands, assets: Res<GameAssets>) {
    commands.spawn((
        RestartButton,
        SessionScoped,
        Button,
        ImageNode::new(assets.button_image.clone()),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            top: Val::Px(64.0),
            width: Val::Px(96.0),
            height: Val::Px(32.0),
            ..default()
        },
    ));
}

/// Restart re-enters Playing through the Preload hop; assets are already
/// resident so the hop is immediate, but it still routes through the same
/// teardown/build path as a fresh session.
fn handle_restart_button(
    q_button: Query<&Interaction, (Changed<Interaction>, With<RestartButton>)>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for interaction in &q_button {
        if *interaction == Interaction::Pressed {
            info!(target: "session", "restart requested");
            next_state.set(AppState::Preload);
        }
    }
}
