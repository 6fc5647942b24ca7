use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::components::SessionScoped;

/// Session score; monotonically non-decreasing until a restart resets it.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score(pub u32);

/// Marker for the score overlay text node.
#[derive(Component)]
pub struct ScoreText;

/// Exact overlay format for a given score value.
pub fn score_label(score: u32) -> String {
    format!("score: {score}")
}

pub struct ScorePlugin;

impl Plugin for ScorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Score>()
            .add_systems(OnEnter(AppState::Playing), (reset_score, spawn_score_ui))
            .add_systems(
                Update,
                update_score_text.run_if(in_state(AppState::Playing)),
            );
    }
}

/// Every session starts from zero.
pub fn reset_score(mut score: ResMut<Score>) {
    score.0 = 0;
}

fn spawn_score_ui(mut commands: Commands) {
    commands.spawn((
        ScoreText,
        SessionScoped,
        Text::new(score_label(0)),
        TextFont {
            font_size: 32.0,
            ..default()
        },
        TextColor(Color::BLACK),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            top: Val::Px(16.0),
            ..default()
        },
    ));
}

fn update_score_text(score: Res<Score>, mut q_text: Query<&mut Text, With<ScoreText>>) {
    if !score.is_changed() {
        return;
    }
    let Ok(mut text) = q_text.single_mut() else {
        return;
    };
    *text = Text::new(score_label(score.0));
}
