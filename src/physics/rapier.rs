use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::config::config::GameConfig;

pub struct PhysicsSetupPlugin; // our wrapper to register and configure Rapier

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
            .add_systems(Startup, configure_gravity);
    }
}

// RapierConfiguration lives on the physics context entity, so it is queried
// rather than accessed as a resource.
fn configure_gravity(
    mut q_cfg: Query<&mut RapierConfiguration>,
    game_cfg: Res<GameConfig>,
) {
    if let Ok(mut rapier_cfg) = q_cfg.single_mut() {
        // Constant downward gravity; terrain bounce comes from the player
        // body's restitution, not from here.
        rapier_cfg.gravity = Vect::new(0.0, game_cfg.physics.gravity_y);
    }
}
