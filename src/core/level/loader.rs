use bevy::prelude::*;
use bevy_rapier2d::prelude::{ActiveEvents, Collider, RigidBody, Sensor};

use crate::app::preload::{GameAssets, LoadedLevel};
use crate::app::state::AppState;
use crate::core::components::{Collectible, SessionScoped};

const Z_TILES: f32 = 0.0;
const Z_COLLECTIBLES: f32 = 1.0;

/// Atlas frame used for collectible gems (tile id 50 in the tileset).
const GEM_TILE_ID: u16 = 50;
/// Sensor radius for the gem pickup area.
const GEM_SENSOR_RADIUS: f32 = 24.0;

/// Builds the static world on session start: terrain colliders derived from
/// the solidity mask, tile visuals, and the collectible sensor set.
pub struct LevelSpawnPlugin;

impl Plugin for LevelSpawnPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(AppState::Playing),
            (spawn_terrain, spawn_collectibles),
        );
    }
}

fn spawn_terrain(
    mut commands: Commands,
    level: Res<LoadedLevel>,
    assets: Res<GameAssets>,
) {
    let level = &level.0;

    // One fixed collider per merged horizontal run of solid tiles.
    let strips = level.solid_strips();
    for strip in &strips {
        commands.spawn((
            SessionScoped,
            RigidBody::Fixed,
            Collider::cuboid(strip.half_extents.x, strip.half_extents.y),
            Transform::from_translation(strip.center.extend(Z_TILES)),
            GlobalTransform::default(),
        ));
    }

    // Tile visuals are independent of the collision strips; every non-empty
    // tile draws its atlas frame (id - 1).
    let mut tile_count = 0usize;
    for row in 0..level.rows() {
        for col in 0..level.columns() {
            let id = level.tiles[row][col];
            if id == 0 {
                continue;
            }
            commands.spawn((
                SessionScoped,
                Sprite::from_atlas_image(
                    assets.tiles_image.clone(),
                    TextureAtlas {
                        layout: assets.tile_layout.clone(),
                        index: (id - 1) as usize,
                    },
                ),
                Transform::from_translation(level.tile_center(col, row).extend(Z_TILES)),
            ));
            tile_count += 1;
        }
    }

    info!(
        target: "level",
        "terrain built: {} solid strips, {} tile sprites",
        strips.len(),
        tile_count
    );
}

fn spawn_collectibles(
    mut commands: Commands,
    level: Res<LoadedLevel>,
    assets: Res<GameAssets>,
) {
    let level = &level.0;
    for def in &level.collectibles {
        let pos: Vec2 = def.pos.clone().into();
        commands.spawn((
            Collectible,
            SessionScoped,
            Sprite::from_atlas_image(
                assets.tiles_image.clone(),
                TextureAtlas {
                    layout: assets.tile_layout.clone(),
                    index: (GEM_TILE_ID - 1) as usize,
                },
            ),
            Transform::from_translation(pos.extend(Z_COLLECTIBLES)),
            RigidBody::Fixed,
            Collider::ball(GEM_SENSOR_RADIUS),
            Sensor,
            ActiveEvents::COLLISION_EVENTS,
        ));
    }
    info!(target: "level", "{} collectibles placed", level.collectibles.len());
}
