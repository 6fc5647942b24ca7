use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::core::config::config::GameConfig;
use crate::core::level::source::load_level_file;

use super::state::AppState;

/// Player spritesheet cell size (px).
pub const PLAYER_CELL: UVec2 = UVec2::new(200, 300);
pub const PLAYER_SHEET_COLUMNS: u32 = 7;
pub const PLAYER_SHEET_ROWS: u32 = 2;

/// Tile spritesheet cell size (px); must match the level's `tile_size`.
pub const TILE_CELL: UVec2 = UVec2::new(64, 64);
pub const TILE_SHEET_COLUMNS: u32 = 10;
pub const TILE_SHEET_ROWS: u32 = 5;

/// Handles to every asset gameplay references by name. Created once; restart
/// hops through Preload find everything already resident.
#[derive(Resource, Debug, Clone)]
pub struct GameAssets {
    pub tiles_image: Handle<Image>,
    pub player_image: Handle<Image>,
    pub button_image: Handle<Image>,
    pub tile_layout: Handle<TextureAtlasLayout>,
    pub player_layout: Handle<TextureAtlasLayout>,
}

impl GameAssets {
    fn image_handles(&self) -> [&Handle<Image>; 3] {
        [&self.tiles_image, &self.player_image, &self.button_image]
    }
}

/// Resource holding the parsed level description for world building.
#[derive(Resource, Debug, Clone)]
pub struct LoadedLevel(pub crate::core::level::layout::LevelFile);

pub struct PreloadPlugin;

impl Plugin for PreloadPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(AppState::Preload),
            begin_asset_load.run_if(not(resource_exists::<GameAssets>)),
        )
        .add_systems(
            Update,
            poll_asset_load
                .run_if(in_state(AppState::Preload))
                .run_if(resource_exists::<GameAssets>),
        );
    }
}

/// Declare every asset the session needs: the two spritesheets and the
/// button image through the asset server, plus the level description file
/// parsed directly. A bad level file aborts startup.
fn begin_asset_load(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
    cfg: Res<GameConfig>,
    mut exit: EventWriter<AppExit>,
) {
    let tile_layout = layouts.add(TextureAtlasLayout::from_grid(
        TILE_CELL,
        TILE_SHEET_COLUMNS,
        TILE_SHEET_ROWS,
        None,
        None,
    ));
    let player_layout = layouts.add(TextureAtlasLayout::from_grid(
        PLAYER_CELL,
        PLAYER_SHEET_COLUMNS,
        PLAYER_SHEET_ROWS,
        None,
        None,
    ));

    commands.insert_resource(GameAssets {
        tiles_image: asset_server.load("textures/tiles.png"),
        player_image: asset_server.load("textures/player.png"),
        button_image: asset_server.load("textures/button.png"),
        tile_layout,
        player_layout,
    });

    match load_level_file(&cfg.default_level_id) {
        Ok(level) => {
            info!(
                target: "level",
                "loaded level '{}': {}x{} tiles, {} collectibles",
                cfg.default_level_id,
                level.columns(),
                level.rows(),
                level.collectibles.len()
            );
            commands.insert_resource(LoadedLevel(level));
        }
        Err(e) => {
            error!(target: "level", "level '{}' failed to load: {e}", cfg.default_level_id);
            exit.write(AppExit::error());
        }
    }
}

/// Advance to Playing once every image is resident. Any load failure is
/// fatal to session start and surfaced to the host.
fn poll_asset_load(
    asset_server: Res<AssetServer>,
    assets: Res<GameAssets>,
    level: Option<Res<LoadedLevel>>,
    mut next_state: ResMut<NextState<AppState>>,
    mut exit: EventWriter<AppExit>,
) {
    if level.is_none() {
        return;
    }
    for handle in assets.image_handles() {
        match asset_server.load_state(handle.id()) {
            LoadState::Loaded => {}
            LoadState::Failed(err) => {
                error!(target: "preload", "asset {:?} failed to load: {err}", handle.path());
                exit.write(AppExit::error());
                return;
            }
            _ => return,
        }
    }
    info!(target: "preload", "all assets resident; starting session");
    next_state.set(AppState::Playing);
}
