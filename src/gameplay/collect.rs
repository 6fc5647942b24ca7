use bevy::prelude::*;
use bevy_rapier2d::prelude::CollisionEvent;

use crate::app::state::AppState;
use crate::core::components::{Collectible, Player};
use crate::core::config::config::GameConfig;
use crate::gameplay::score::Score;

pub struct CollectPlugin;

impl Plugin for CollectPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            collect_on_overlap.run_if(in_state(AppState::Playing)),
        );
    }
}

/// Player-vs-collectible overlap handling. The collectible sensors report
/// contact without altering trajectories; on first contact the collectible
/// is despawned and the score advances by the configured increment. A
/// despawned collectible no longer matches the query, so collection is
/// idempotent per instance.
pub fn collect_on_overlap(
    mut commands: Commands,
    mut ev_collisions: EventReader<CollisionEvent>,
    cfg: Res<GameConfig>,
    mut score: ResMut<Score>,
    q_player: Query<Entity, With<Player>>,
    q_collectibles: Query<Entity, With<Collectible>>,
) {
    let Ok(player) = q_player.single() else {
        return;
    };

    // Despawn commands are deferred; track entities already collected this
    // frame so duplicate events cannot double-count.
    let mut collected: Vec<Entity> = Vec::new();

    for ev in ev_collisions.read() {
        let CollisionEvent::Started(e1, e2, _flags) = ev else {
            continue;
        };
        let other = if *e1 == player {
            *e2
        } else if *e2 == player {
            *e1
        } else {
            continue;
        };
        if q_collectibles.get(other).is_err() || collected.contains(&other) {
            continue;
        }
        collected.push(other);
        commands.entity(other).despawn();
        score.0 += cfg.score.increment;
        info!(target: "collect", "collected {other:?}, score={}", score.0);
    }
}
