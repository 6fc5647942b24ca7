use bevy::prelude::*;
use bevy_rapier2d::prelude::{
    ActiveEvents, CoefficientCombineRule, Collider, LockedAxes, Restitution, RigidBody, Velocity,
};

use crate::app::preload::{GameAssets, LoadedLevel};
use crate::app::state::AppState;
use crate::core::components::{AnimationMode, Player, SessionScoped};
use crate::core::config::config::GameConfig;
use crate::core::system::system_order::PrePhysicsSet;
use crate::gameplay::animation::{clip_for, Anim};

const Z_PLAYER: f32 = 2.0;

/// Source art cell is 200x300; drawn at 0.6 scale.
const PLAYER_DRAW_SIZE: Vec2 = Vec2::new(120.0, 180.0);
/// Hitbox is 90x270 in source pixels, scaled with the sprite.
const PLAYER_HITBOX_HALF: Vec2 = Vec2::new(27.0, 81.0);

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Playing), spawn_player)
            .add_systems(
                Update,
                apply_player_input
                    .in_set(PrePhysicsSet)
                    .run_if(in_state(AppState::Playing)),
            );
    }
}

fn spawn_player(
    mut commands: Commands,
    assets: Res<GameAssets>,
    level: Res<LoadedLevel>,
    cfg: Res<GameConfig>,
) {
    let spawn: Vec2 = level.0.player_spawn.clone().into();
    let idle = clip_for(AnimationMode::Idle);

    let mut sprite = Sprite::from_atlas_image(
        assets.player_image.clone(),
        TextureAtlas {
            layout: assets.player_layout.clone(),
            index: idle.start,
        },
    );
    sprite.custom_size = Some(PLAYER_DRAW_SIZE);

    commands.spawn((
        Player,
        SessionScoped,
        sprite,
        Transform::from_translation(spawn.extend(Z_PLAYER)),
        RigidBody::Dynamic,
        Collider::cuboid(PLAYER_HITBOX_HALF.x, PLAYER_HITBOX_HALF.y),
        Velocity::zero(),
        Restitution {
            coefficient: cfg.physics.restitution,
            combine_rule: CoefficientCombineRule::Max,
        },
        LockedAxes::ROTATION_LOCKED,
        ActiveEvents::COLLISION_EVENTS,
        AnimationMode::default(),
        Anim::from_clip(idle),
    ));
    info!(target: "session", "player spawned at {spawn}");
}

/// Per-frame input contract, applied before the physics step:
/// - left held  -> vel.x = -reverse_run_factor * run_speed, mode Run
/// - right held -> vel.x = +run_speed, mode Run
/// - neither    -> vel.x = 0, mode Idle
/// - |vel.y| beyond the airborne threshold -> mode Jump (overrides the above)
/// - otherwise an up press sets vel.y = jump_speed. The impulse is gated on
///   not already moving vertically past the threshold, so a press mid-flight
///   never re-triggers it.
pub fn apply_player_input(
    keys: Res<ButtonInput<KeyCode>>,
    cfg: Res<GameConfig>,
    mut q_player: Query<(&mut Velocity, &mut AnimationMode), With<Player>>,
) {
    let Ok((mut vel, mut mode)) = q_player.single_mut() else {
        return;
    };
    let p = &cfg.player;

    let left = keys.pressed(KeyCode::ArrowLeft);
    let right = keys.pressed(KeyCode::ArrowRight);
    let up = keys.pressed(KeyCode::ArrowUp);

    let mut next = AnimationMode::Idle;
    if left {
        vel.linvel.x = -p.reverse_run_factor * p.run_speed;
        next = AnimationMode::Run;
    } else if right {
        vel.linvel.x = p.run_speed;
        next = AnimationMode::Run;
    } else {
        vel.linvel.x = 0.0;
    }

    if vel.linvel.y.abs() > cfg.physics.airborne_threshold {
        next = AnimationMode::Jump;
    } else if up {
        vel.linvel.y = p.jump_speed;
    }

    // Change detection feeds the clip swap; only write on a real transition.
    if *mode != next {
        *mode = next;
    }
}
