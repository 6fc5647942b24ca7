use bevy::prelude::*;

use gemrun::{GameConfig, GamePlugin};

fn main() {
    // Load configuration up front; a missing or malformed config is fatal.
    let cfg = GameConfig::load_from_file("assets/config/game.ron")
        .expect("Failed to load assets/config/game.ron");

    App::new()
        .insert_resource(cfg.clone())
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: cfg.window.title.clone(),
                        resolution: (cfg.window.width, cfg.window.height).into(),
                        // Full-bounds scaling when embedded in a web page.
                        fit_canvas_to_parent: true,
                        resizable: true,
                        ..default()
                    }),
                    ..default()
                })
                // Pixel art: no filtering on tile/sprite sampling.
                .set(ImagePlugin::default_nearest()),
        )
        .add_plugins(GamePlugin)
        .run();
}
